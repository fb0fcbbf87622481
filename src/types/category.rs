/// The fixed life-domains a footprint is broken down into, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Utilities,
    University,
    Computing,
    Diet,
    Transportation,
    Travel,
}

impl Category {
    pub const COUNT: usize = 6;

    pub const ALL: [Category; Self::COUNT] = [
        Category::Utilities,
        Category::University,
        Category::Computing,
        Category::Diet,
        Category::Transportation,
        Category::Travel,
    ];

    /// Maps an input section index to its category. Sections past the last
    /// category have none.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Utilities => "Utilities",
            Self::University => "University",
            Self::Computing => "Computing",
            Self::Diet => "Diet",
            Self::Transportation => "Transportation",
            Self::Travel => "Travel",
        }
    }

    /// How many numbers the category's input section must supply.
    pub fn arity(self) -> usize {
        match self {
            Self::Utilities => 2,
            Self::University => 1,
            Self::Computing => 5,
            Self::Diet => 4,
            Self::Transportation => 4,
            Self::Travel => 5,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
