use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EventFormIntent {
    NameChanged { name: String },
    DateChanged { date: String },
    PriceChanged { price: f64 },
    DescriptionChanged { description: String },
    LocationChanged { input: String },
    /// Select or deselect a category tag.
    CategoryToggled { tag: String },
    /// Select or deselect an age-group tag.
    AgeGroupToggled { tag: String },
}

impl Intent for EventFormIntent {}
