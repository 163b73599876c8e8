// ==========================================
// 测试数据构建器 - 原始记录行与 CSV 文件
// ==========================================

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

pub const CSV_HEADER: &str = "process,direction,category,value,unit,loss_rate";

// ==========================================
// 记录行构建器
// ==========================================
// 生成 "工序,方向,类别;名称,数值,单位,损耗率"; 数值缺省表示占位

pub struct RecordBuilder {
    process: String,
    direction: String,
    category: String,
    name: Option<String>,
    value: Option<f64>,
    unit: Option<String>,
    loss_rate: Option<f64>,
}

impl RecordBuilder {
    pub fn input(process: &str, category: &str) -> Self {
        Self::new(process, "INPUT", category)
    }

    pub fn output(process: &str, category: &str) -> Self {
        Self::new(process, "OUTPUT", category)
    }

    fn new(process: &str, direction: &str, category: &str) -> Self {
        Self {
            process: process.to_string(),
            direction: direction.to_string(),
            category: category.to_string(),
            name: None,
            value: None,
            unit: None,
            loss_rate: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn quantity(mut self, value: f64, unit: &str, loss_rate: f64) -> Self {
        self.value = Some(value);
        self.unit = Some(unit.to_string());
        self.loss_rate = Some(loss_rate);
        self
    }

    pub fn build(self) -> String {
        let category = match &self.name {
            Some(name) => format!("{};{}", self.category, name),
            None => self.category.clone(),
        };
        format!(
            "{},{},{},{},{},{}",
            self.process,
            self.direction,
            category,
            self.value.map(|v| v.to_string()).unwrap_or_default(),
            self.unit.unwrap_or_default(),
            self.loss_rate.map(|v| v.to_string()).unwrap_or_default(),
        )
    }
}

// ==========================================
// 预置场景
// ==========================================

/// 次级数据: 能源工序 (14 KWH, 损耗 0.1, 排放强度 0.6) + 裁剪工序 (皮革及其排放)
pub fn secondary_records() -> Vec<String> {
    vec![
        RecordBuilder::input("energy", "Energy")
            .name("energia")
            .quantity(14.0, "KWH", 0.1)
            .build(),
        RecordBuilder::output("energy", "Emission")
            .quantity(0.6, "KGCO2EQ", 0.0)
            .build(),
        RecordBuilder::input("cutting", "Material")
            .name("leather")
            .quantity(0.8, "KG", 0.2)
            .build(),
        RecordBuilder::output("cutting", "Emission")
            .name("leather")
            .quantity(0.5, "KGCO2EQ", 0.0)
            .build(),
    ]
}

/// 主数据: 无能源工序; 裁剪工序的皮革为占位流
pub fn primary_records() -> Vec<String> {
    vec![
        RecordBuilder::input("cutting", "Material").name("leather").build(),
        RecordBuilder::input("stitching", "Material")
            .name("thread")
            .quantity(0.1, "KG", 0.0)
            .build(),
        RecordBuilder::input("assembling", "Material")
            .name("sole")
            .quantity(0.3, "KG", 0.0)
            .build(),
        RecordBuilder::input("package", "Material")
            .name("box")
            .quantity(0.2, "KG", 0.0)
            .build(),
    ]
}

/// 主数据工序链的期望总值: 能源 14*1.1*0.6 + 裁剪 0.8*1.2*0.5
pub const EXPECTED_TOTAL: f64 = 9.24 + 0.48;

/// n 条互不相同工序的有效记录
pub fn distinct_records(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            RecordBuilder::input(&format!("process_{}", i), "Material")
                .name("steel")
                .quantity(1.0, "KG", 0.0)
                .build()
        })
        .collect()
}

// ==========================================
// CSV 文件
// ==========================================

/// 写入带表头的临时 CSV; prefix 决定数据类别 (如 "secondaryData")
pub fn write_csv(prefix: &str, records: &[String]) -> NamedTempFile {
    let mut file = Builder::new()
        .prefix(prefix)
        .suffix(".csv")
        .tempfile()
        .expect("创建临时 CSV 失败");
    writeln!(file, "{}", CSV_HEADER).expect("写入表头失败");
    for record in records {
        writeln!(file, "{}", record).expect("写入记录失败");
    }
    file
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
