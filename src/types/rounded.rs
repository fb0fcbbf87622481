/// A value rounded to four decimal places, as printed in reports.
#[derive(Debug, Default, PartialEq, PartialOrd, Clone, Copy)]
pub struct Rounded(i64);

impl Rounded {
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 10000.0
    }
}

impl From<f64> for Rounded {
    fn from(value: f64) -> Self {
        Self((value * 10000.0).round() as i64)
    }
}

// Shortest form, keeping one decimal for whole numbers: "1.12", "0.0219", "2.0"
impl std::fmt::Display for Rounded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.to_f64();
        if value.fract() == 0.0 {
            write!(f, "{:.1}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}
