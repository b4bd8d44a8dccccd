use super::constants::{
    BASE_YEAR_KEY, GAS_GOLF_EVENT_TYPE_KEY, INIT_STRATEGY_KEY, NEW_VALUE_KEY,
};

pub enum EventType {
    InstantiateContract,
    MigrateContract,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(GAS_GOLF_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    pub fn set_init_strategy<T: ToString>(mut self, init_strategy: T) -> Self {
        self.attributes
            .push((INIT_STRATEGY_KEY.into(), init_strategy.to_string()));
        self
    }

    pub fn set_base_year<T: ToString>(mut self, base_year: T) -> Self {
        self.attributes
            .push((BASE_YEAR_KEY.into(), base_year.to_string()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
