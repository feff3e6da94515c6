/// A selectable topping: a fixed id and the label shown next to its checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: &'static str,
    pub label: &'static str,
}

/// The fixed, ordered topping catalog.
///
/// Defined at process start and never mutated; checkboxes are keyed by
/// `id` and rendered in this order.
pub const TOPPINGS: &[Topping] = &[
    Topping { id: "1", label: "Pepperoni" },
    Topping { id: "2", label: "Green Peppers" },
    Topping { id: "3", label: "Pineapple" },
    Topping { id: "4", label: "Mushrooms" },
    Topping { id: "5", label: "Ham" },
];

/// Looks up the display label for a catalog topping id.
pub fn topping_label(id: &str) -> Option<&'static str> {
    TOPPINGS.iter().find(|t| t.id == id).map(|t| t.label)
}
