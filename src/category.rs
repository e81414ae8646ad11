pub const DEFAULT_BADGE_CLASS: &str = "bg-gray-100 text-gray-600";
pub const DEFAULT_BAR_CLASS: &str = "bg-gray-400";

/// The fixed set of labels an expense can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsAndUtilities,
    Healthcare,
    Education,
    Travel,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Healthcare,
        Category::Education,
        Category::Travel,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Travel => "Travel",
            Category::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Category::FoodAndDining => "bg-orange-100 text-orange-600",
            Category::Transportation => "bg-blue-100 text-blue-600",
            Category::Shopping => "bg-pink-100 text-pink-600",
            Category::Entertainment => "bg-purple-100 text-purple-600",
            Category::BillsAndUtilities => "bg-yellow-100 text-yellow-600",
            Category::Healthcare => "bg-red-100 text-red-600",
            Category::Education => "bg-green-100 text-green-600",
            Category::Travel => "bg-indigo-100 text-indigo-600",
            Category::Other => DEFAULT_BADGE_CLASS,
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            Category::FoodAndDining => "bg-orange-500",
            Category::Transportation => "bg-blue-500",
            Category::Shopping => "bg-pink-500",
            Category::Entertainment => "bg-purple-500",
            Category::BillsAndUtilities => "bg-yellow-500",
            Category::Healthcare => "bg-red-500",
            Category::Education => "bg-green-500",
            Category::Travel => "bg-indigo-500",
            Category::Other => DEFAULT_BAR_CLASS,
        }
    }
}

/// Badge style for a label coming off the wire; unknown labels get the default.
pub fn badge_class_for(label: &str) -> &'static str {
    Category::from_label(label)
        .map(Category::badge_class)
        .unwrap_or(DEFAULT_BADGE_CLASS)
}

pub fn bar_class_for(label: &str) -> &'static str {
    Category::from_label(label)
        .map(Category::bar_class)
        .unwrap_or(DEFAULT_BAR_CLASS)
}
