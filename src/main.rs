use anyhow::{bail, Result};
use trivia_client::utils::logging;
use trivia_client::{App, Config};

const USAGE: &str = "用法: trivia-client [--render-only] [配置文件路径]";

/// 命令行参数
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config_path: Option<String>,
    render_only: bool,
    help: bool,
}

/// 解析命令行参数，未知的 `-` 开头参数直接报错
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    for arg in args {
        match arg.as_str() {
            "--render-only" => cli.render_only = true,
            "-h" | "--help" => cli.help = true,
            flag if flag.starts_with('-') => bail!("未知参数: {}\n{}", flag, USAGE),
            _ => cli.config_path = Some(arg),
        }
    }
    Ok(cli)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args(std::env::args().skip(1))?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // 加载配置
    let config = match cli.config_path.or_else(|| std::env::var("TRIVIA_CONFIG").ok()) {
        Some(path) => Config::load(path)?,
        None => Config::from_env(),
    };

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let app = App::initialize(config).await?;
    if cli.render_only {
        app.render_only().await?;
    } else {
        app.run().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flag_and_config_path() {
        let cli = parse_args(args(&["--render-only", "trivia.toml"])).unwrap();
        assert!(cli.render_only);
        assert_eq!(cli.config_path.as_deref(), Some("trivia.toml"));
    }

    #[test]
    fn test_help_flag() {
        assert!(parse_args(args(&["--help"])).unwrap().help);
        assert!(parse_args(args(&["-h"])).unwrap().help);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = parse_args(args(&["--render_only"])).unwrap_err();
        assert!(err.to_string().contains("--render_only"));
        assert!(parse_args(args(&["-x", "trivia.toml"])).is_err());
    }
}
