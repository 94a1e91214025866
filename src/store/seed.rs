// ==========================================
// 工厂生产计划看板 - 默认种子数据集
// ==========================================
// 单会话演示数据: "Planta Norte" 果浆加工厂
// 三条产线 (果浆/浓缩/灌装), 七张订单, 一台在班机台
// 每次调用构造全新对象树, 与既有状态零共享 (重置语义依赖此点)
// ==========================================

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::alert::Alert;
use crate::domain::kpi::KpiSnapshot;
use crate::domain::line::Line;
use crate::domain::machine::Machine;
use crate::domain::order::{DowntimeRecord, Order, ProductionRecord};
use crate::domain::state::PlantState;
use crate::domain::types::{AlertSeverity, DowntimeReason, OrderStatus};
use crate::domain::week;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("种子时刻合法")
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("种子日期合法")
}

fn prod(h: u32, m: u32, kg: f64, operator: &str, comments: &str) -> ProductionRecord {
    ProductionRecord {
        time: hm(h, m),
        quantity_kg: kg,
        operator: operator.to_string(),
        comments: comments.to_string(),
    }
}

fn stop(
    reason: DowntimeReason,
    start: (u32, u32),
    end: (u32, u32),
    duration: i64,
    comments: &str,
) -> DowntimeRecord {
    DowntimeRecord {
        reason,
        start_time: hm(start.0, start.1),
        end_time: hm(end.0, end.1),
        duration_minutes: duration,
        comments: comments.to_string(),
    }
}

fn line(id: &str, name: &str, plan: f64, real: f64, compliance: u32) -> (String, Line) {
    (
        id.to_string(),
        Line {
            id: id.to_string(),
            name: name.to_string(),
            plan,
            real,
            compliance,
        },
    )
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    line_id: &str,
    product: &str,
    plan: f64,
    real: f64,
    status: OrderStatus,
    commitment_date: NaiveDate,
    week_number: u32,
    production_records: Vec<ProductionRecord>,
    downtime_records: Vec<DowntimeRecord>,
) -> (String, Order) {
    (
        id.to_string(),
        Order {
            id: id.to_string(),
            line_id: line_id.to_string(),
            product: product.to_string(),
            plan,
            real,
            status,
            commitment_date,
            week_number,
            production_records,
            downtime_records,
        },
    )
}

/// 构造默认种子状态
///
/// # 参数
/// - now: 构造时刻; 决定 selected_week / 订单归属周 / last_updated
pub fn default_state(now: NaiveDateTime) -> PlantState {
    let current_week = week::week_number(now.date());

    let lines = BTreeMap::from([
        line("LINEA_A", "Línea A · Pulpa", 45.0, 38.0, 84),
        line("LINEA_B", "Línea B · Concentrado", 50.0, 35.0, 70),
        line("LINEA_C", "Línea C · Envasado", 25.0, 21.0, 84),
    ]);

    let orders = BTreeMap::from([
        order(
            "FR-342",
            "LINEA_A",
            "Pulpa Manzana",
            8500.0,
            7200.0,
            OrderStatus::InProgress,
            ymd(2024, 4, 15),
            current_week,
            vec![
                prod(8, 10, 450.0, "Máquina 03", "Carga normal"),
                prod(9, 30, 520.0, "Máquina 03", ""),
                prod(11, 15, 480.0, "Máquina 03", "Ajuste de temperatura"),
                prod(13, 45, 510.0, "Máquina 03", ""),
                prod(15, 20, 490.0, "Máquina 03", ""),
                prod(16, 50, 460.0, "Máquina 03", ""),
            ],
            vec![
                stop(DowntimeReason::MaterialShortage, (10, 0), (10, 15), 15, "Esperando pulpa base"),
                stop(DowntimeReason::Cleaning, (12, 0), (12, 30), 30, "Limpieza programada"),
                stop(DowntimeReason::Maintenance, (14, 0), (14, 20), 20, "Revisión de válvulas"),
            ],
        ),
        order(
            "FR-345",
            "LINEA_A",
            "Pulpa Pera",
            7200.0,
            6800.0,
            OrderStatus::InProgress,
            ymd(2024, 4, 16),
            current_week,
            vec![
                prod(8, 0, 400.0, "Máquina 01", ""),
                prod(10, 30, 420.0, "Máquina 01", ""),
                prod(12, 0, 410.0, "Máquina 01", ""),
            ],
            vec![stop(DowntimeReason::FormatChange, (9, 0), (9, 30), 30, "")],
        ),
        order(
            "FR-348",
            "LINEA_A",
            "Pulpa Durazno",
            6000.0,
            6000.0,
            OrderStatus::Finished,
            ymd(2024, 4, 14),
            current_week,
            vec![
                prod(8, 0, 500.0, "Máquina 02", ""),
                prod(10, 0, 520.0, "Máquina 02", ""),
            ],
            vec![],
        ),
        order(
            "FR-350",
            "LINEA_B",
            "Concentrado Manzana",
            12000.0,
            8500.0,
            OrderStatus::Delayed,
            ymd(2024, 4, 15),
            current_week,
            vec![
                prod(8, 0, 800.0, "Máquina 05", ""),
                prod(11, 0, 750.0, "Máquina 05", ""),
            ],
            vec![stop(
                DowntimeReason::QualityHold,
                (9, 0),
                (10, 30),
                90,
                "Esperando liberación de calidad",
            )],
        ),
        order(
            "FR-352",
            "LINEA_B",
            "Concentrado Pera",
            10000.0,
            9200.0,
            OrderStatus::InProgress,
            ymd(2024, 4, 17),
            current_week,
            vec![
                prod(8, 0, 700.0, "Máquina 06", ""),
                prod(10, 0, 720.0, "Máquina 06", ""),
            ],
            vec![],
        ),
        order(
            "FR-355",
            "LINEA_C",
            "Envasado Pulpa 1L",
            8000.0,
            7500.0,
            OrderStatus::InProgress,
            ymd(2024, 4, 16),
            current_week,
            vec![
                prod(8, 0, 600.0, "Máquina 08", ""),
                prod(10, 0, 580.0, "Máquina 08", ""),
            ],
            vec![],
        ),
        order(
            "FR-356",
            "LINEA_C",
            "Envasado Pulpa 500ml",
            5000.0,
            4200.0,
            OrderStatus::Planned,
            ymd(2024, 4, 18),
            current_week,
            vec![],
            vec![],
        ),
    ]);

    let alerts = vec![
        Alert {
            severity: AlertSeverity::Warning,
            icon: "⚠️".to_string(),
            title: "Línea B con retraso".to_string(),
            description: "Concentrado Manzana (FR-350) está 29% por debajo del plan".to_string(),
        },
        Alert {
            severity: AlertSeverity::Danger,
            icon: "🔴".to_string(),
            title: "Parada prolongada".to_string(),
            description: "Línea A - Falta de insumos desde 10:00".to_string(),
        },
        Alert {
            severity: AlertSeverity::Info,
            icon: "ℹ️".to_string(),
            title: "Cambio de turno".to_string(),
            description: "Turno mañana finaliza a las 18:00".to_string(),
        },
    ];

    let machines = BTreeMap::from([(
        "LINEA_A_03".to_string(),
        Machine {
            id: "LINEA_A_03".to_string(),
            line_id: "LINEA_A".to_string(),
            current_order_id: "FR-342".to_string(),
            product: "Pulpa Manzana".to_string(),
            shift: "Mañana".to_string(),
            shift_target: 2000.0,
            produced_so_far: 7200.0,
        },
    )]);

    PlantState {
        selected_week: current_week,
        plant_name: "Planta Norte".to_string(),
        last_updated: now,
        kpis: KpiSnapshot {
            weekly_plan: 120.0,
            accumulated_real: 94.0,
            compliance: 78,
            delay_count: 3,
        },
        lines,
        orders,
        alerts,
        machines,
    }
}
