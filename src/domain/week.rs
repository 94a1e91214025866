// ==========================================
// 工厂生产计划看板 - 周历工具
// ==========================================
// ISO-8601 周 (周四锚定, 周一为一周起点)
// 全库唯一实现, 看板/装载计划/订单归属一律复用本模块
// ==========================================

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

// ==========================================
// WeekInfo - 周信息
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekInfo {
    pub iso_year: i32,      // ISO 周所属年 (跨年周与日历年可能不同)
    pub number: u32,        // 周号
    pub start: NaiveDate,   // 周一
    pub end: NaiveDate,     // 周日
}

/// 日期所在的 ISO 周号
pub fn week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// 某 ISO 年第 week 周的周一; 周号越界返回 None
pub fn week_start(iso_year: i32, week: u32) -> Option<NaiveDate> {
    NaiveDate::from_isoywd_opt(iso_year, week, Weekday::Mon)
}

/// 周一对应的周日
pub fn week_end(start: NaiveDate) -> NaiveDate {
    start + Duration::days(6)
}

/// 日期所在周的完整信息
pub fn week_of(date: NaiveDate) -> WeekInfo {
    let iso = date.iso_week();
    // from_isoywd_opt 对合法 iso_week 输出必然有值
    let start = week_start(iso.year(), iso.week())
        .unwrap_or_else(|| date - Duration::days(date.weekday().num_days_from_monday() as i64));
    WeekInfo {
        iso_year: iso.year(),
        number: iso.week(),
        start,
        end: week_end(start),
    }
}

/// 从 from 所在周起的连续 count 周 (含当周)
///
/// 跨年时周号按 ISO 规则翻转 (…52/53 → 1), 不做简单加法
pub fn upcoming_weeks(from: NaiveDate, count: usize) -> Vec<WeekInfo> {
    let mut weeks = Vec::with_capacity(count);
    let mut cursor = week_of(from).start;
    for _ in 0..count {
        weeks.push(week_of(cursor));
        cursor += Duration::days(7);
    }
    weeks
}
