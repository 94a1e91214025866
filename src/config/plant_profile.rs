// ==========================================
// 工厂生产计划看板 - 工厂档案
// ==========================================
// 产线与产品目录的静态档案; 装载计划时用于产品归线校验
// ==========================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ==========================================
// PlantProfile - 工厂档案
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantProfile {
    /// 工厂名称
    #[serde(default = "default_plant_name")]
    pub plant_name: String,

    /// 产线 → 可排产品目录
    #[serde(default = "default_product_catalog")]
    pub product_catalog: BTreeMap<String, Vec<String>>,
}

fn default_plant_name() -> String {
    "Planta Norte".to_string()
}

fn default_product_catalog() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        (
            "LINEA_A".to_string(),
            vec![
                "Pulpa Manzana".to_string(),
                "Pulpa Pera".to_string(),
                "Pulpa Durazno".to_string(),
            ],
        ),
        (
            "LINEA_B".to_string(),
            vec![
                "Concentrado Manzana".to_string(),
                "Concentrado Pera".to_string(),
            ],
        ),
        (
            "LINEA_C".to_string(),
            vec![
                "Envasado Pulpa 1L".to_string(),
                "Envasado Pulpa 500ml".to_string(),
            ],
        ),
    ])
}

impl Default for PlantProfile {
    fn default() -> Self {
        Self {
            plant_name: default_plant_name(),
            product_catalog: default_product_catalog(),
        }
    }
}

impl PlantProfile {
    /// 产品是否属于产线目录
    ///
    /// 目录中没有该产线条目时不做限制 (档案未维护的产线放行)
    pub fn product_allowed(&self, line_id: &str, product: &str) -> bool {
        match self.product_catalog.get(line_id) {
            Some(products) => products.iter().any(|p| p == product),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_validation() {
        let profile = PlantProfile::default();
        assert!(profile.product_allowed("LINEA_A", "Pulpa Manzana"));
        assert!(!profile.product_allowed("LINEA_A", "Concentrado Pera"));
        // 未维护的产线不做限制
        assert!(profile.product_allowed("LINEA_X", "Cualquiera"));
    }
}
