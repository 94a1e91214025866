// ==========================================
// 工厂生产计划看板 - 演示入口
// ==========================================
// 用途: 以种子数据启动看板核心, 跑一笔报工与若干模拟节拍,
// 在日志中展示 机台 → 订单 → 产线 → 全厂 的联动口径
// ==========================================

use std::sync::Arc;

use plant_dashboard::config::DashboardConfig;
use plant_dashboard::{logging, DashboardApi, ProductionApi, StateStore, APP_NAME, VERSION};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    // 加载配置 (覆盖文件缺失时使用缺省档案)
    let config = Arc::new(DashboardConfig::load_or_default(None));
    tracing::info!(plant = %config.plant.plant_name, "配置加载完成");

    // 构建状态仓储与 API
    let store = Arc::new(StateStore::new());
    let production_api = ProductionApi::new(store.clone(), config.clone());
    let dashboard_api = DashboardApi::new(store.clone(), config.clone());

    let kpis = dashboard_api.kpis()?;
    tracing::info!(
        weekly_plan_t = kpis.weekly_plan,
        accumulated_real_t = kpis.accumulated_real,
        compliance = kpis.compliance,
        delay_count = kpis.delay_count,
        "初始 KPI"
    );

    // 一笔机台报工: 观察联动入账
    let receipt = production_api.submit_unchecked("LINEA_A_03", 250.0, "Carga de demostración")?;
    tracing::info!(
        order_id = %receipt.order_id,
        accepted_kg = receipt.accepted_kg,
        progress_pct = receipt.progress_pct,
        "报工回执"
    );

    // 三次模拟负载节拍
    for _ in 0..3 {
        let summary = dashboard_api.simulate_load()?;
        tracing::info!(
            lines_credited = summary.lines_credited,
            orders_credited = summary.orders_credited,
            total_increment_t = summary.total_increment_t,
            "模拟节拍"
        );
    }

    let state = dashboard_api.snapshot()?;
    for line in state.lines.values() {
        tracing::info!(
            line = %line.name,
            plan_t = line.plan,
            real_t = line.real,
            compliance = line.compliance,
            "产线汇总"
        );
    }
    let kpis = dashboard_api.kpis()?;
    tracing::info!(
        weekly_plan_t = kpis.weekly_plan,
        accumulated_real_t = kpis.accumulated_real,
        compliance = kpis.compliance,
        delay_count = kpis.delay_count,
        "收盘 KPI"
    );

    Ok(())
}
