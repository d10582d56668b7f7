//! Static word lists the synthesizer samples from.

/// A seasoning with a preset amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seasoning {
    pub name: &'static str,
    pub quantity: &'static str,
    pub unit: &'static str,
}

const fn seasoning(name: &'static str, quantity: &'static str, unit: &'static str) -> Seasoning {
    Seasoning {
        name,
        quantity,
        unit,
    }
}

pub const SEASONINGS: [Seasoning; 10] = [
    seasoning("fresh herbs", "2", "tbsp"),
    seasoning("minced garlic", "3", "cloves"),
    seasoning("grated ginger", "1", "tbsp"),
    seasoning("lemon zest", "1", "tsp"),
    seasoning("chili flakes", "1/2", "tsp"),
    seasoning("ground cumin", "1", "tsp"),
    seasoning("paprika", "1", "tsp"),
    seasoning("dried oregano", "1", "tsp"),
    seasoning("fresh basil", "1/4", "cup"),
    seasoning("soy sauce", "2", "tbsp"),
];

pub const COOKING_STYLES: [&str; 10] = [
    "Pan-Seared",
    "Roasted",
    "Grilled",
    "Braised",
    "Stir-Fried",
    "Slow-Cooked",
    "Herb-Crusted",
    "Spice-Rubbed",
    "Glazed",
    "Caramelized",
];

/// Units a main ingredient may be measured in.
pub const MAIN_UNITS: [&str; 4] = ["g", "ml", "pieces", "cups"];

/// Cook times in minutes.
pub const COOK_TIMES: [u32; 7] = [15, 20, 25, 30, 35, 40, 45];

/// Seasonings drawn per recipe.
pub const SEASONINGS_PER_RECIPE: usize = 3;
