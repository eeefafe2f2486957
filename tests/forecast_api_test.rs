// ==========================================
// ForecastApi 集成测试
// ==========================================
// 测试目标: 验证场景 → 预测 → 缺口 → 报告的完整链路
// 覆盖范围: 部件画像场景、显式参数场景、本地化建议、末次采购、CSV 导出
// ==========================================


use rtr_forecaster::api::write_series_csv;
use rtr_forecaster::{
    ApiError, ComponentCategory, ConfigManager, FailureMode, ForecastApi, PlannerConfig,
    ProcurementUrgency, ScenarioRequest, SupportObligation,
};
use test_helpers::assert_close;

fn api_with_locale(locale: &str) -> ForecastApi {
    ForecastApi::with_config(PlannerConfig {
        locale: locale.to_string(),
        ..PlannerConfig::default()
    })
}

// ==========================================
// 测试用例 1: 完整链路
// ==========================================

#[test]
fn test_run_liability_forecast_for_component() {
    rtr_forecaster::logging::init_test();
    println!("\n=== 测试：电池 10000 台保有量 ===");

    let api = ForecastApi::new(&ConfigManager::default());
    let scenario = ScenarioRequest::for_component(ComponentCategory::Batteries, 10_000, 120.0);

    let report = api.run_liability_forecast(&scenario).unwrap();

    assert_eq!(report.obligation, SupportObligation::CaliforniaSb244);
    assert_eq!(report.penalty_note, "$1,000 per violation");
    assert_eq!(report.failure_mode, FailureMode::WearOut);
    assert_eq!(report.request.model.shape(), 1.8);
    assert_eq!(report.request.horizon_years, 7.0);
    assert_eq!(report.analysis.series.len(), 29);
    assert_close(report.buffer_factor, 1.1, 1e-12);

    let last = report.analysis.series.last().unwrap();
    assert_eq!(report.analysis.total_parts_required, last.parts_required);
    assert_close(
        report.analysis.capital_lockup,
        last.parts_required * 120.0,
        1e-6,
    );
    assert_eq!(report.analysis.urgency, ProcurementUrgency::Critical);
    assert!(report.recommendation.contains("critical"));

    println!("✓ 峰值缺口: {:.0} 件 @ {:.2} 年", report.analysis.max_gap, report.analysis.max_gap_time);
    println!("✓ 资本占用: {:.2}", report.analysis.capital_lockup);
}

#[test]
fn test_explicit_weibull_scenario() {
    let api = api_with_locale("en");
    let mut scenario = ScenarioRequest::with_weibull(1.0, 5.0, 1_000, 10.0);
    scenario.horizon_years = Some(5.0);
    scenario.service_level_target_pct = Some(80.0);

    let report = api.run_liability_forecast(&scenario).unwrap();

    assert_eq!(report.failure_mode, FailureMode::Random);
    assert_eq!(report.buffer_factor, 1.0);
    let last = report.analysis.series.last().unwrap();
    assert_close(last.cumulative_failure_fraction, 0.6321, 1e-4);
}

#[test]
fn test_report_ids_are_unique_and_serializable() {
    let api = api_with_locale("en");
    let scenario = ScenarioRequest::for_component(ComponentCategory::Chargers, 2_000, 80.0);

    let a = api.run_liability_forecast(&scenario).unwrap();
    let b = api.run_liability_forecast(&scenario).unwrap();
    assert_ne!(a.report_id, b.report_id);
    assert_eq!(a.analysis, b.analysis);

    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["scenario"]["component"], "chargers");
    assert_eq!(json["failure_mode"], "WEAR_OUT");
    assert_eq!(json["penalty_note"], "$1,000 per violation");
}

#[test]
fn test_penalty_note_follows_scenario_obligation() {
    let api = api_with_locale("en");
    let mut scenario = ScenarioRequest::for_component(ComponentCategory::Motors, 1_000, 300.0);
    scenario.obligation = Some(SupportObligation::EuRightToRepair);

    let report = api.run_liability_forecast(&scenario).unwrap();
    assert_eq!(report.obligation, SupportObligation::EuRightToRepair);
    assert_eq!(report.request.horizon_years, 10.0);
    assert_eq!(
        report.penalty_note,
        SupportObligation::EuRightToRepair.penalty_note()
    );
}

// ==========================================
// 测试用例 2: 本地化建议
// ==========================================

#[test]
fn test_recommendation_is_localized() {
    let scenario = ScenarioRequest::for_component(ComponentCategory::Motors, 5_000, 340.0);

    let en = api_with_locale("en").run_liability_forecast(&scenario).unwrap();
    let zh = api_with_locale("zh-CN").run_liability_forecast(&scenario).unwrap();

    assert!(en.recommendation.contains("110%"));
    assert!(!en.recommendation.contains("%{"));
    assert!(zh.recommendation.contains("严重"));
    assert!(zh.recommendation.contains("110%"));
}

// ==========================================
// 测试用例 3: 参数错误
// ==========================================

#[test]
fn test_invalid_scenarios_rejected() {
    let api = api_with_locale("en");

    let zero_base = ScenarioRequest::for_component(ComponentCategory::Motors, 0, 100.0);
    let err = api.run_liability_forecast(&zero_base).unwrap_err();
    assert!(matches!(err, ApiError::InvalidParameter(ref e) if e.param() == "install_base"));

    let bad_shape = ScenarioRequest::with_weibull(0.0, 5.0, 100, 100.0);
    let err = api.run_liability_forecast(&bad_shape).unwrap_err();
    assert!(err.is_invalid_parameter());

    let negative_cost = ScenarioRequest::for_component(ComponentCategory::Motors, 100, -1.0);
    let err = api.run_liability_forecast(&negative_cost).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let mut no_model = ScenarioRequest::with_weibull(1.5, 5.0, 100, 1.0);
    no_model.weibull_shape = None;
    assert!(matches!(
        api.run_liability_forecast(&no_model),
        Err(ApiError::InvalidInput(_))
    ));
}

// ==========================================
// 测试用例 4: 末次采购
// ==========================================

#[test]
fn test_size_last_time_buy_from_report() {
    let api = api_with_locale("en");
    let result = api.size_last_time_buy(10_000.0, 100.0).unwrap();
    assert_eq!(result.order_quantity, 11_000);
    assert_close(result.expected_scrap_cost, 61_600.0, 1e-6);

    let mut config = PlannerConfig::default();
    config.last_time_buy.order_multiplier = 1.5;
    let api = ForecastApi::with_config(config);
    assert_eq!(api.size_last_time_buy(100.0, 1.0).unwrap().order_quantity, 150);
}

#[test]
fn test_simulate_last_time_buy() {
    let mut config = PlannerConfig::default();
    config.monte_carlo.scenarios = 50;
    let api = ForecastApi::with_config(config);
    let scenario = ScenarioRequest::for_component(ComponentCategory::TcuDisplay, 200, 60.0);

    let a = api.simulate_last_time_buy(&scenario).unwrap();
    let b = api.simulate_last_time_buy(&scenario).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.scenarios, 50);
    assert!(a.p95_order_quantity >= a.p95_failures);
}

// ==========================================
// 测试用例 5: 参考数据与导出
// ==========================================

#[test]
fn test_component_profiles() {
    let profiles = api_with_locale("en").component_profiles();
    assert_eq!(profiles.len(), 4);
    assert!(profiles
        .iter()
        .any(|p| p.category == ComponentCategory::TcuDisplay && p.weibull_shape == 1.2));
}

#[test]
fn test_export_report_series_csv() {
    let api = api_with_locale("en");
    let scenario = ScenarioRequest::for_component(ComponentCategory::Motors, 1_000, 100.0);
    let report = api.run_liability_forecast(&scenario).unwrap();

    let mut buf = Vec::new();
    write_series_csv(&mut buf, &report.analysis.series).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(text.lines().count(), report.analysis.series.len() + 1);
    assert!(text.starts_with("t_years,"));
}
