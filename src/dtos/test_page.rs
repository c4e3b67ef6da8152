use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TestIndexView {
    pub data1: &'static str,
    pub data2: i32,
    pub data3: String,
}
