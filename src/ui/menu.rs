//! Static select-menu descriptions, converted to serenity components at send time.
use serenity::builder::{
    CreateActionRow, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    /// Shown under the label; carries the fee.
    pub description: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectMenu {
    pub custom_id: &'static str,
    pub placeholder: &'static str,
    pub options: &'static [MenuOption],
}

impl SelectMenu {
    pub fn values(&self) -> Vec<&'static str> {
        self.options.iter().map(|o| o.value).collect()
    }

    pub fn to_action_row(&self) -> CreateActionRow {
        let options = self
            .options
            .iter()
            .map(|o| CreateSelectMenuOption::new(o.label, o.value).description(o.description))
            .collect();
        let menu = CreateSelectMenu::new(self.custom_id, CreateSelectMenuKind::String { options })
            .placeholder(self.placeholder);
        CreateActionRow::SelectMenu(menu)
    }
}
