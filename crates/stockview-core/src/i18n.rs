//! Localized user-facing text.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::PtBr, Self::En];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::En => "en",
        }
    }

    pub const fn text(self, message: Message) -> &'static str {
        match self {
            Self::PtBr => message.pt_br(),
            Self::En => message.en(),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en" | "en-us" => Ok(Self::En),
            _ => Err(ValidationError::InvalidLocale {
                value: value.to_owned(),
            }),
        }
    }
}

/// Every string a screen can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    Loading,
    ListingFetchFailed,
    ListingInvalidResponse,
    ListingEmpty,
    DetailsFetchFailed,
    DetailsUnavailable,
    OpenLabel,
    CloseLabel,
    HighLabel,
    LowLabel,
    BackLabel,
    ListPrompt,
    DetailsPrompt,
    UnknownSelection,
    UnsupportedSymbol,
}

impl Message {
    /// Stable identifier used in machine-readable output.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Loading => "screen.loading",
            Self::ListingFetchFailed => "listing.fetch_failed",
            Self::ListingInvalidResponse => "listing.invalid_response",
            Self::ListingEmpty => "listing.empty",
            Self::DetailsFetchFailed => "details.fetch_failed",
            Self::DetailsUnavailable => "details.unavailable",
            Self::OpenLabel => "label.open",
            Self::CloseLabel => "label.close",
            Self::HighLabel => "label.high",
            Self::LowLabel => "label.low",
            Self::BackLabel => "label.back",
            Self::ListPrompt => "prompt.list",
            Self::DetailsPrompt => "prompt.details",
            Self::UnknownSelection => "prompt.unknown_selection",
            Self::UnsupportedSymbol => "prompt.unsupported_symbol",
        }
    }

    const fn pt_br(self) -> &'static str {
        match self {
            Self::Loading => "Carregando...",
            Self::ListingFetchFailed => "Erro ao buscar os dados",
            Self::ListingInvalidResponse => {
                "Resposta inválida da API. Talvez o limite tenha sido atingido."
            }
            Self::ListingEmpty => "Nenhum ativo encontrado.",
            Self::DetailsFetchFailed => "Erro ao buscar os detalhes",
            Self::DetailsUnavailable => "Dados não disponíveis para este ativo.",
            Self::OpenLabel => "Abertura",
            Self::CloseLabel => "Fechamento",
            Self::HighLabel => "Máxima",
            Self::LowLabel => "Mínima",
            Self::BackLabel => "Voltar",
            Self::ListPrompt => "Número ou símbolo do ativo (q para sair):",
            Self::DetailsPrompt => "Enter ou v para voltar (q para sair):",
            Self::UnknownSelection => "Ativo não encontrado na lista.",
            Self::UnsupportedSymbol => "Este ativo não pode ser aberto: símbolo em formato não suportado.",
        }
    }

    const fn en(self) -> &'static str {
        match self {
            Self::Loading => "Loading...",
            Self::ListingFetchFailed => "Failed to fetch data",
            Self::ListingInvalidResponse => {
                "Invalid API response. The request limit may have been reached."
            }
            Self::ListingEmpty => "No assets found.",
            Self::DetailsFetchFailed => "Failed to fetch details",
            Self::DetailsUnavailable => "Data not available for this asset.",
            Self::OpenLabel => "Open",
            Self::CloseLabel => "Close",
            Self::HighLabel => "High",
            Self::LowLabel => "Low",
            Self::BackLabel => "Back",
            Self::ListPrompt => "Asset number or symbol (q to quit):",
            Self::DetailsPrompt => "Enter or b to go back (q to quit):",
            Self::UnknownSelection => "Asset not found in the list.",
            Self::UnsupportedSymbol => "This asset cannot be opened: unsupported symbol format.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_spellings() {
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("pt_br".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(ValidationError::InvalidLocale { .. })
        ));
    }

    #[test]
    fn default_locale_keeps_portuguese_messages() {
        assert_eq!(
            Locale::default().text(Message::ListingEmpty),
            "Nenhum ativo encontrado."
        );
        assert_eq!(Locale::En.text(Message::BackLabel), "Back");
    }

    #[test]
    fn locale_serializes_as_tag() {
        let json = serde_json::to_string(&Locale::PtBr).expect("serializes");
        assert_eq!(json, "\"pt-BR\"");
    }
}
