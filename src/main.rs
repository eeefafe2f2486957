// ==========================================
// Right-to-Repair 备件责任预测 - 命令行入口
// ==========================================
// 用法:
//   rtr-forecaster <component> <install_base> <unit_cost> [--csv] [--monte-carlo] [--log-json]
// 示例:
//   rtr-forecaster batteries 10000 120
//   rtr-forecaster motors 5000 340 --csv > motors.csv
// ==========================================

use std::io;

use anyhow::{bail, Context};
use serde_json::json;

use rtr_forecaster::api::write_series_csv;
use rtr_forecaster::logging::{self, LogFormat};
use rtr_forecaster::{ComponentCategory, ConfigManager, ForecastApi, ScenarioRequest};

const USAGE: &str =
    "用法: rtr-forecaster <component> <install_base> <unit_cost> [--csv] [--monte-carlo] [--log-json]";

struct CliArgs {
    component: ComponentCategory,
    install_base: u64,
    unit_cost: f64,
    csv: bool,
    monte_carlo: bool,
    log_json: bool,
}

impl CliArgs {
    /// --log-json 优先于环境变量
    fn log_format(&self, from_env: LogFormat) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            from_env
        }
    }
}

fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let (flags, positional): (Vec<&String>, Vec<&String>) =
        args.iter().partition(|a| a.starts_with("--"));

    if positional.len() != 3 {
        bail!("{}", USAGE);
    }

    let mut cli = CliArgs {
        component: positional[0].parse().map_err(anyhow::Error::msg)?,
        install_base: positional[1]
            .parse()
            .with_context(|| format!("install_base 无效: {}", positional[1]))?,
        unit_cost: positional[2]
            .parse()
            .with_context(|| format!("unit_cost 无效: {}", positional[2]))?,
        csv: false,
        monte_carlo: false,
        log_json: false,
    };

    for flag in flags {
        match flag.as_str() {
            "--csv" => cli.csv = true,
            "--monte-carlo" => cli.monte_carlo = true,
            "--log-json" => cli.log_json = true,
            other => bail!("未知参数: {}\n{}", other, USAGE),
        }
    }
    Ok(cli)
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    logging::init_with(cli.log_format(LogFormat::from_env()));

    tracing::info!(version = rtr_forecaster::VERSION, "{}", rtr_forecaster::APP_NAME);

    let config_manager = ConfigManager::load()?;
    let api = ForecastApi::new(&config_manager);

    let scenario = ScenarioRequest::for_component(cli.component, cli.install_base, cli.unit_cost);
    let report = api.run_liability_forecast(&scenario)?;

    if cli.csv {
        write_series_csv(io::stdout().lock(), &report.analysis.series)?;
        return Ok(());
    }

    let last_time_buy =
        api.size_last_time_buy(report.analysis.total_parts_required, cli.unit_cost)?;
    let monte_carlo = if cli.monte_carlo {
        Some(api.simulate_last_time_buy(&scenario)?)
    } else {
        None
    };

    let output = json!({
        "report": report,
        "last_time_buy": last_time_buy,
        "monte_carlo": monte_carlo,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
