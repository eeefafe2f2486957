// ==========================================
// 末次采购测算集成测试
// ==========================================
// 测试目标: 验证订货量、投资额与报废成本的闭式计算
// 覆盖范围: 默认成本模型、自定义成本模型、取整、参数校验
// ==========================================


use rtr_forecaster::engine::{size_last_time_buy, size_last_time_buy_default};
use rtr_forecaster::{ForecastError, LastTimeBuyPolicy};
use test_helpers::assert_close;

// ==========================================
// 测试用例 1: 订货量与投资额
// ==========================================

#[test]
fn test_order_quantity_and_investment() {
    println!("\n=== 测试：10000 件 × 1.1 倍 ===");

    let result = size_last_time_buy_default(10_000.0, 100.0).unwrap();

    assert_eq!(result.order_quantity, 11_000);
    assert_close(result.total_investment, 1_100_000.0, 1e-6);
    println!("✓ 订货量: {} 件", result.order_quantity);
    println!("✓ 总投资: {:.2}", result.total_investment);
}

// ==========================================
// 测试用例 2: 报废成本
// ==========================================

#[test]
fn test_scrap_cost_after_liquidation() {
    let policy = LastTimeBuyPolicy {
        order_multiplier: 1.1,
        scrap_fraction: 0.08,
        liquidation_recovery_fraction: 0.3,
    };
    let result = size_last_time_buy(10_000.0, 100.0, &policy).unwrap();

    assert_close(result.expected_scrap_units, 880.0, 1e-6);
    assert_close(result.expected_scrap_cost, 61_600.0, 1e-6);
    assert_close(result.scrap_cost_pct(), 5.6, 1e-9);
}

#[test]
fn test_full_recovery_has_no_scrap_cost() {
    let policy = LastTimeBuyPolicy {
        liquidation_recovery_fraction: 1.0,
        ..LastTimeBuyPolicy::default()
    };
    let result = size_last_time_buy(5_000.0, 40.0, &policy).unwrap();

    assert_eq!(result.order_quantity, 5_500);
    assert!(result.expected_scrap_units > 0.0);
    assert_eq!(result.expected_scrap_cost, 0.0);
}

// ==========================================
// 测试用例 3: 取整
// ==========================================

#[test]
fn test_fractional_demand_rounds() {
    // 1234.5 × 1.1 = 1357.95 → 1358
    let result = size_last_time_buy_default(1_234.5, 10.0).unwrap();
    assert_eq!(result.order_quantity, 1_358);
    assert_close(result.total_investment, 13_580.0, 1e-6);

    let zero = size_last_time_buy_default(0.0, 10.0).unwrap();
    assert_eq!(zero.order_quantity, 0);
    assert_eq!(zero.scrap_cost_pct(), 0.0);
}

// ==========================================
// 测试用例 4: 参数校验
// ==========================================

#[test]
fn test_invalid_policy_rejected() {
    let cases = [
        (
            LastTimeBuyPolicy {
                order_multiplier: -0.1,
                ..LastTimeBuyPolicy::default()
            },
            "order_multiplier",
        ),
        (
            LastTimeBuyPolicy {
                scrap_fraction: -0.01,
                ..LastTimeBuyPolicy::default()
            },
            "scrap_fraction",
        ),
        (
            LastTimeBuyPolicy {
                liquidation_recovery_fraction: 1.2,
                ..LastTimeBuyPolicy::default()
            },
            "liquidation_recovery_fraction",
        ),
    ];

    for (policy, param) in cases {
        let err = size_last_time_buy(100.0, 1.0, &policy).unwrap_err();
        assert_eq!(err.param(), param);
    }
}

#[test]
fn test_invalid_inputs_rejected() {
    let err = size_last_time_buy_default(-1.0, 10.0).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::InvalidParameter {
            param: "total_parts_required",
            ..
        }
    ));

    let err = size_last_time_buy_default(10.0, f64::NAN).unwrap_err();
    assert_eq!(err.param(), "unit_cost");
}
