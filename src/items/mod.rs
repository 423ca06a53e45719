mod calculator;

pub use calculator::CalculatorItem;
