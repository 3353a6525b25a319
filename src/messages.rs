//! User-facing text
//!
//! Every string shown in a dialog, label or button comes from here so the
//! whole interface follows the configured locale.

use crate::model::{AlertKind, EntityKind};
use serde::{Deserialize, Serialize};

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en", alias = "en-US")]
    En,
    #[serde(rename = "pt-BR", alias = "pt-br", alias = "pt")]
    PtBr,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" => Ok(Locale::En),
            "pt-br" | "pt" => Ok(Locale::PtBr),
            other => Err(format!("unknown locale '{}', expected 'en' or 'pt-BR'", other)),
        }
    }
}

/// Upper-case the first character
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Message catalog for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    pub locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Entity names
    // ─────────────────────────────────────────────────────────────────────────

    /// Lower-case singular noun, e.g. "brand"
    pub fn noun(&self, kind: EntityKind) -> &'static str {
        match (self.locale, kind) {
            (Locale::En, EntityKind::Brands) => "brand",
            (Locale::En, EntityKind::Categories) => "category",
            (Locale::PtBr, EntityKind::Brands) => "marca",
            (Locale::PtBr, EntityKind::Categories) => "categoria",
        }
    }

    /// Screen title, e.g. "Brands"
    pub fn title(&self, kind: EntityKind) -> &'static str {
        match (self.locale, kind) {
            (Locale::En, EntityKind::Brands) => "Brands",
            (Locale::En, EntityKind::Categories) => "Categories",
            (Locale::PtBr, EntityKind::Brands) => "Marcas",
            (Locale::PtBr, EntityKind::Categories) => "Categorias",
        }
    }

    pub fn stock_manager(&self) -> &'static str {
        "Stock Manager"
    }

    pub fn stock_manager_hint(&self) -> &'static str {
        match self.locale {
            Locale::En => "↑/↓ select · Enter open · F1 help · q quit",
            Locale::PtBr => "↑/↓ escolher · Enter abrir · F1 ajuda · q sair",
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Form labels
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id_label(&self, editable: bool) -> &'static str {
        match (self.locale, editable) {
            (Locale::En, false) => "Id (press Search to look one up)",
            (Locale::En, true) => "Id (type an id and press Enter)",
            (Locale::PtBr, false) => "Id (clique em Pesquisar para buscar)",
            (Locale::PtBr, true) => "Id (digite o id e pressione Enter)",
        }
    }

    pub fn name_label(&self) -> &'static str {
        match self.locale {
            Locale::En => "Name",
            Locale::PtBr => "Nome",
        }
    }

    pub fn description_label(&self) -> &'static str {
        match self.locale {
            Locale::En => "Description",
            Locale::PtBr => "Descrição",
        }
    }

    pub fn add_button(&self) -> &'static str {
        match self.locale {
            Locale::En => "Add",
            Locale::PtBr => "Incluir",
        }
    }

    pub fn search_button(&self) -> &'static str {
        match self.locale {
            Locale::En => "Search",
            Locale::PtBr => "Pesquisar",
        }
    }

    pub fn edit_button(&self) -> &'static str {
        match self.locale {
            Locale::En => "Edit",
            Locale::PtBr => "Editar",
        }
    }

    pub fn delete_button(&self) -> &'static str {
        match self.locale {
            Locale::En => "Remove",
            Locale::PtBr => "Remover",
        }
    }

    pub fn clear_button(&self) -> &'static str {
        match self.locale {
            Locale::En => "Clear",
            Locale::PtBr => "Limpar",
        }
    }

    pub fn back_link(&self) -> String {
        match self.locale {
            Locale::En => format!("Back to {}", self.stock_manager()),
            Locale::PtBr => format!("Voltar para {}", self.stock_manager()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dialog text
    // ─────────────────────────────────────────────────────────────────────────

    pub fn not_all_data(&self) -> &'static str {
        match self.locale {
            Locale::En => "Not all data was supplied. Fill in the name and the description.",
            Locale::PtBr => "Nem todos os dados foram informados. Preencha o nome e a descrição.",
        }
    }

    pub fn search_before_delete(&self, kind: EntityKind) -> String {
        let noun = self.noun(kind);
        match self.locale {
            Locale::En => format!(
                "Before removing a {}, search for it and check that you really want to delete it.",
                noun
            ),
            Locale::PtBr => format!(
                "Antes de remover uma {}, pesquise-a e verifique se realmente deseja excluí-la.",
                noun
            ),
        }
    }

    pub fn search_before_edit(&self, kind: EntityKind) -> String {
        let noun = self.noun(kind);
        match self.locale {
            Locale::En => format!("Search for a {} before editing it.", noun),
            Locale::PtBr => format!("Pesquise uma {} antes de editá-la.", noun),
        }
    }

    pub fn created(&self, kind: EntityKind) -> String {
        let noun = capitalize(self.noun(kind));
        match self.locale {
            Locale::En => format!("{} created successfully!", noun),
            Locale::PtBr => format!("{} cadastrada com sucesso!", noun),
        }
    }

    pub fn create_failed(&self, kind: EntityKind) -> String {
        let noun = self.noun(kind);
        match self.locale {
            Locale::En => format!("Failed to create {}. Please try again later!", noun),
            Locale::PtBr => format!("Erro ao cadastrar {}. Tente novamente mais tarde!", noun),
        }
    }

    pub fn updated(&self, kind: EntityKind) -> String {
        let noun = capitalize(self.noun(kind));
        match self.locale {
            Locale::En => format!("{} updated successfully!", noun),
            Locale::PtBr => format!("{} atualizada com sucesso!", noun),
        }
    }

    pub fn update_failed(&self, kind: EntityKind) -> String {
        let noun = self.noun(kind);
        match self.locale {
            Locale::En => format!("Failed to update {}. Please try again later!", noun),
            Locale::PtBr => format!("Erro ao atualizar {}. Tente novamente mais tarde!", noun),
        }
    }

    pub fn confirm_delete_title(&self) -> &'static str {
        match self.locale {
            Locale::En => " Remove? ",
            Locale::PtBr => " Remover? ",
        }
    }

    pub fn confirm_delete(&self, kind: EntityKind, name: &str) -> String {
        let noun = self.noun(kind);
        match self.locale {
            Locale::En => format!(
                "Do you really want to delete the data of the {}: {}",
                noun, name
            ),
            Locale::PtBr => format!(
                "Você realmente deseja deletar os dados referentes à {}: {}",
                noun, name
            ),
        }
    }

    pub fn deleted(&self, kind: EntityKind) -> String {
        let noun = capitalize(self.noun(kind));
        match self.locale {
            Locale::En => format!("{} removed successfully!", noun),
            Locale::PtBr => format!("{} removida com sucesso!", noun),
        }
    }

    pub fn delete_failed(&self, kind: EntityKind) -> String {
        let noun = self.noun(kind);
        match self.locale {
            Locale::En => format!("Failed to remove {}. Please try again later!", noun),
            Locale::PtBr => format!("Erro ao remover {}. Tente novamente mais tarde!", noun),
        }
    }

    pub fn not_found(&self, kind: EntityKind) -> String {
        let noun = self.noun(kind);
        match self.locale {
            Locale::En => format!("This {} was not found.", noun),
            Locale::PtBr => format!("Essa {} não foi encontrada.", noun),
        }
    }

    pub fn lookup_failed(&self, kind: EntityKind) -> String {
        let noun = self.noun(kind);
        match self.locale {
            Locale::En => format!("Failed to look up {}. Please try again later!", noun),
            Locale::PtBr => format!("Erro ao pesquisar {}. Tente novamente mais tarde!", noun),
        }
    }

    pub fn alert_title(&self, kind: AlertKind) -> &'static str {
        match (self.locale, kind) {
            (Locale::En, AlertKind::Info) => " Done ",
            (Locale::En, AlertKind::Warning) => " Attention ",
            (Locale::En, AlertKind::Error) => " Error ",
            (Locale::PtBr, AlertKind::Info) => " Concluído ",
            (Locale::PtBr, AlertKind::Warning) => " Atenção ",
            (Locale::PtBr, AlertKind::Error) => " Erro ",
        }
    }

    pub fn yes_no(&self) -> (&'static str, &'static str) {
        match self.locale {
            Locale::En => ("Yes", "No"),
            Locale::PtBr => ("Sim", "Não"),
        }
    }

    pub fn quit_title(&self) -> &'static str {
        match self.locale {
            Locale::En => " Quit? ",
            Locale::PtBr => " Sair? ",
        }
    }

    pub fn quit_question(&self) -> &'static str {
        match self.locale {
            Locale::En => "Are you sure you want to quit?",
            Locale::PtBr => "Tem certeza que deseja sair?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serde_names() {
        let locale: Locale = serde_json::from_str("\"pt-BR\"").unwrap();
        assert_eq!(locale, Locale::PtBr);
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
    }

    #[test]
    fn test_portuguese_messages() {
        let messages = Messages::new(Locale::PtBr);
        assert_eq!(
            messages.created(EntityKind::Brands),
            "Marca cadastrada com sucesso!"
        );
        assert_eq!(
            messages.not_found(EntityKind::Brands),
            "Essa marca não foi encontrada."
        );
        assert_eq!(
            messages.confirm_delete(EntityKind::Brands, "Acme"),
            "Você realmente deseja deletar os dados referentes à marca: Acme"
        );
    }

    #[test]
    fn test_stock_manager_hint_follows_locale() {
        assert!(Messages::default().stock_manager_hint().contains("quit"));
        assert!(Messages::new(Locale::PtBr)
            .stock_manager_hint()
            .contains("sair"));
    }

    #[test]
    fn test_confirm_delete_names_the_record() {
        let messages = Messages::default();
        assert!(messages
            .confirm_delete(EntityKind::Categories, "Hardware")
            .ends_with("category: Hardware"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("brand"), "Brand");
        assert_eq!(capitalize(""), "");
    }
}
