// 領域層：數字緩衝、格式種類與遮罩介面

pub mod model;
pub mod ports;
