// ==========================================
// 联动入账引擎 集成测试
// ==========================================
// 测试范围:
// 1. 机台 → 订单 → 产线 → 全厂 的增量一致性
// 2. 达成率派生口径
// 3. 单调不变式
// 4. 引用缺失时的零变更拒绝
// 5. 自由口径的超报行为
// ==========================================

mod test_helpers;

use plant_dashboard::engine::rollup;
use plant_dashboard::engine::{CapPolicy, ProductionEngine, ProductionInput};
use plant_dashboard::store::StoreError;

fn input(machine_id: &str, kg: f64, cap: CapPolicy) -> ProductionInput {
    ProductionInput {
        machine_id: machine_id.to_string(),
        order_id: None,
        quantity_kg: kg,
        comments: String::new(),
        cap,
    }
}

// ==========================================
// 增量一致性
// ==========================================

#[test]
fn test_rollup_delta_consistency_across_layers() {
    let before = test_helpers::seeded_state_multi_machine();
    let now = test_helpers::fixed_now();

    // 三条产线各报若干笔
    let submissions = [
        ("LINEA_A_03", 450.0),
        ("LINEA_B_06", 300.0),
        ("LINEA_A_03", 120.5),
        ("LINEA_C_08", 80.0),
        ("LINEA_B_06", 210.0),
    ];

    let mut state = before.clone();
    for (machine_id, kg) in submissions {
        let (next, _) =
            ProductionEngine::record(state, &input(machine_id, kg, CapPolicy::Unchecked), now)
                .unwrap();
        state = next;
    }

    // 每条产线: 产线吨增量 == 该线订单 kg 增量合计 / 1000
    for line_id in ["LINEA_A", "LINEA_B", "LINEA_C"] {
        let line_delta = state.line(line_id).unwrap().real - before.line(line_id).unwrap().real;
        let orders_delta_kg = test_helpers::line_orders_real_kg(&state, line_id)
            - test_helpers::line_orders_real_kg(&before, line_id);
        assert!(
            (line_delta - orders_delta_kg / 1000.0).abs() < 1e-9,
            "{} 层间增量不一致: line={} orders_kg={}",
            line_id,
            line_delta,
            orders_delta_kg
        );
    }

    // 全厂: KPI 增量 == 各产线增量合计
    let kpi_delta = state.kpis.accumulated_real - before.kpis.accumulated_real;
    let lines_delta: f64 = ["LINEA_A", "LINEA_B", "LINEA_C"]
        .iter()
        .map(|id| state.line(id).unwrap().real - before.line(id).unwrap().real)
        .sum();
    assert!((kpi_delta - lines_delta).abs() < 1e-9);

    // 达成率始终是派生值
    for line_id in ["LINEA_A", "LINEA_B", "LINEA_C"] {
        let line = state.line(line_id).unwrap();
        assert_eq!(line.compliance, rollup::compliance_pct(line.real, line.plan));
    }
    assert_eq!(
        state.kpis.compliance,
        rollup::compliance_pct(state.kpis.accumulated_real, state.kpis.weekly_plan)
    );
}

#[test]
fn test_machine_counter_tracks_submissions() {
    let state = test_helpers::seeded_state();
    let now = test_helpers::fixed_now();
    let before = state.machine("LINEA_A_03").unwrap().produced_so_far;

    let (state, _) =
        ProductionEngine::record(state, &input("LINEA_A_03", 450.0, CapPolicy::Unchecked), now)
            .unwrap();
    let (state, _) =
        ProductionEngine::record(state, &input("LINEA_A_03", 120.0, CapPolicy::Unchecked), now)
            .unwrap();

    assert!(
        (state.machine("LINEA_A_03").unwrap().produced_so_far - (before + 570.0)).abs() < 1e-9
    );
}

// ==========================================
// 单调不变式
// ==========================================

#[test]
fn test_monotonicity_over_submission_sequence() {
    let mut state = test_helpers::seeded_state_multi_machine();
    let now = test_helpers::fixed_now();

    let mut last_order = state.order("FR-352").unwrap().real;
    let mut last_line = state.line("LINEA_B").unwrap().real;
    let mut last_kpi = state.kpis.accumulated_real;
    let mut last_machine = state.machine("LINEA_B_06").unwrap().produced_so_far;

    for kg in [10.0, 250.0, 33.3, 400.0, 1.0] {
        let (next, _) =
            ProductionEngine::record(state, &input("LINEA_B_06", kg, CapPolicy::Unchecked), now)
                .unwrap();
        state = next;

        let order = state.order("FR-352").unwrap().real;
        let line = state.line("LINEA_B").unwrap().real;
        let kpi = state.kpis.accumulated_real;
        let machine = state.machine("LINEA_B_06").unwrap().produced_so_far;
        assert!(order >= last_order);
        assert!(line >= last_line);
        assert!(kpi >= last_kpi);
        assert!(machine >= last_machine);
        last_order = order;
        last_line = line;
        last_kpi = kpi;
        last_machine = machine;
    }
}

// ==========================================
// 引用缺失
// ==========================================

#[test]
fn test_unknown_machine_is_rejected_without_mutation() {
    let before = test_helpers::seeded_state();
    let now = test_helpers::fixed_now();

    let result = ProductionEngine::record(
        before.clone(),
        &input("LINEA_Z_99", 100.0, CapPolicy::Unchecked),
        now,
    );
    match result {
        Err(StoreError::NotFound { entity, id }) => {
            assert_eq!(entity, "machine");
            assert_eq!(id, "LINEA_Z_99");
        }
        other => panic!("期望 NotFound, 实得 {:?}", other.err()),
    }
}

#[test]
fn test_unknown_order_is_rejected() {
    let state = test_helpers::seeded_state();
    let now = test_helpers::fixed_now();

    let request = ProductionInput {
        machine_id: "LINEA_A_03".to_string(),
        order_id: Some("FR-000".to_string()),
        quantity_kg: 100.0,
        comments: String::new(),
        cap: CapPolicy::Unchecked,
    };
    let result = ProductionEngine::record(state, &request, now);
    assert!(matches!(
        result,
        Err(StoreError::NotFound { ref entity, .. }) if entity == "order"
    ));
}

// ==========================================
// 自由口径超报
// ==========================================

#[test]
fn test_unchecked_submission_may_exceed_plan() {
    let state = test_helpers::seeded_state();
    let now = test_helpers::fixed_now();

    // FR-342: plan=8500, real=7200; 自由口径一次报 2000 → 9200
    let (state, receipt) =
        ProductionEngine::record(state, &input("LINEA_A_03", 2000.0, CapPolicy::Unchecked), now)
            .unwrap();
    assert_eq!(receipt.order_id, "FR-342");
    assert!((state.order("FR-342").unwrap().real - 9200.0).abs() < 1e-9);
    // 进度允许越过 100
    assert_eq!(receipt.progress_pct, 108); // round(9200/8500*100)
    // 全厂口径未截断
    assert!((state.kpis.accumulated_real - 96.0).abs() < 1e-9);
}

#[test]
fn test_record_carries_machine_as_operator() {
    let state = test_helpers::seeded_state();
    let now = test_helpers::fixed_now();
    let count_before = state.order("FR-342").unwrap().production_records.len();

    let request = ProductionInput {
        machine_id: "LINEA_A_03".to_string(),
        order_id: None,
        quantity_kg: 300.0,
        comments: "Turno tarde".to_string(),
        cap: CapPolicy::Unchecked,
    };
    let (state, _) = ProductionEngine::record(state, &request, now).unwrap();

    let records = &state.order("FR-342").unwrap().production_records;
    assert_eq!(records.len(), count_before + 1);
    let last = records.last().unwrap();
    assert_eq!(last.operator, "LINEA_A_03");
    assert_eq!(last.comments, "Turno tarde");
    assert!((last.quantity_kg - 300.0).abs() < 1e-9);
    // 报工时刻按分钟记录
    assert_eq!(last.time, chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    // 存储顺序为追加序
    assert!((records[count_before - 1].quantity_kg - 460.0).abs() < 1e-9);
}
