use std::collections::BTreeSet;

use crate::ui::event_form::intent::EventFormIntent;
use crate::ui::event_form::state::EventFormState;
use crate::ui::mvi::Reducer;

pub struct EventFormReducer;

impl Reducer for EventFormReducer {
    type State = EventFormState;
    type Intent = EventFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EventFormIntent::NameChanged { name } => state.name = name,
            EventFormIntent::DateChanged { date } => state.date = date,
            EventFormIntent::PriceChanged { price } => state.price = price,
            EventFormIntent::DescriptionChanged { description } => {
                state.description = description
            }
            EventFormIntent::LocationChanged { input } => state.location_input = input,
            EventFormIntent::CategoryToggled { tag } => toggle(&mut state.categories, tag),
            EventFormIntent::AgeGroupToggled { tag } => toggle(&mut state.age_groups, tag),
        }
        state
    }
}

fn toggle(tags: &mut BTreeSet<String>, tag: String) {
    if !tags.remove(&tag) {
        tags.insert(tag);
    }
}
