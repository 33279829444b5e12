use serde::{Deserialize, Serialize};

/// Disclosure severity tier of a PII category.
///
/// Critical categories block publication of a record on their own;
/// moderate categories flag it for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    Moderate,
}

/// Closed set of detectable PII categories.
///
/// Brazilian identifier formats and LGPD sensitive-data classes. The
/// severity partition follows the latest engine policy: official personal
/// identifiers and all sensitive topics are critical; contact data,
/// company identifiers and names are moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiCategory {
    /// CPF — Cadastro de Pessoa Física.
    IndividualTaxId,
    /// CNPJ — Cadastro Nacional de Pessoa Jurídica.
    CompanyId,
    /// RG, CNH, NIS, PIS, PASEP, NIT, CTPS, Matrícula, Título de Eleitor.
    GeneralRegistry,
    Phone,
    Email,
    FullAddress,
    /// CEP — Código de Endereçamento Postal.
    PostalCode,
    /// SEI administrative process number.
    LegalProcess,
    PersonName,
    SensitiveHealth,
    SensitiveMinor,
    SensitiveSocial,
    SensitiveRace,
    SensitiveGender,
}

impl PiiCategory {
    /// Every category, in detector-priority order.
    pub const ALL: [PiiCategory; 14] = [
        PiiCategory::LegalProcess,
        PiiCategory::IndividualTaxId,
        PiiCategory::PersonName,
        PiiCategory::GeneralRegistry,
        PiiCategory::CompanyId,
        PiiCategory::Email,
        PiiCategory::FullAddress,
        PiiCategory::PostalCode,
        PiiCategory::Phone,
        PiiCategory::SensitiveHealth,
        PiiCategory::SensitiveMinor,
        PiiCategory::SensitiveSocial,
        PiiCategory::SensitiveRace,
        PiiCategory::SensitiveGender,
    ];

    /// Stable wire name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            PiiCategory::IndividualTaxId => "INDIVIDUAL_TAX_ID",
            PiiCategory::CompanyId => "COMPANY_ID",
            PiiCategory::GeneralRegistry => "GENERAL_REGISTRY",
            PiiCategory::Phone => "PHONE",
            PiiCategory::Email => "EMAIL",
            PiiCategory::FullAddress => "FULL_ADDRESS",
            PiiCategory::PostalCode => "POSTAL_CODE",
            PiiCategory::LegalProcess => "LEGAL_PROCESS",
            PiiCategory::PersonName => "PERSON_NAME",
            PiiCategory::SensitiveHealth => "SENSITIVE_HEALTH",
            PiiCategory::SensitiveMinor => "SENSITIVE_MINOR",
            PiiCategory::SensitiveSocial => "SENSITIVE_SOCIAL",
            PiiCategory::SensitiveRace => "SENSITIVE_RACE",
            PiiCategory::SensitiveGender => "SENSITIVE_GENDER",
        }
    }

    /// Human-readable description (Portuguese, used in report reasons).
    pub fn description(&self) -> &'static str {
        match self {
            PiiCategory::IndividualTaxId => "Cadastro de Pessoa Física (CPF)",
            PiiCategory::CompanyId => "Cadastro Nacional de Pessoa Jurídica (CNPJ)",
            PiiCategory::GeneralRegistry => "Registros Gerais (RG/NIS/PIS/CNH)",
            PiiCategory::Phone => "Número de Telefone",
            PiiCategory::Email => "Endereço de E-mail",
            PiiCategory::FullAddress => "Endereço Completo",
            PiiCategory::PostalCode => "Código de Endereçamento Postal (CEP)",
            PiiCategory::LegalProcess => "Número de Processo SEI",
            PiiCategory::PersonName => "Nome de Pessoa",
            PiiCategory::SensitiveHealth => "Dados de Saúde (Sensível)",
            PiiCategory::SensitiveMinor => "Dados de Menor de Idade (Sensível)",
            PiiCategory::SensitiveSocial => "Dados Sociais (Sensível)",
            PiiCategory::SensitiveRace => "Dados de Raça/Cor (Sensível)",
            PiiCategory::SensitiveGender => "Dados de Gênero (Sensível)",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            PiiCategory::IndividualTaxId
            | PiiCategory::GeneralRegistry
            | PiiCategory::SensitiveHealth
            | PiiCategory::SensitiveMinor
            | PiiCategory::SensitiveSocial
            | PiiCategory::SensitiveRace
            | PiiCategory::SensitiveGender => Severity::Critical,
            PiiCategory::CompanyId
            | PiiCategory::Phone
            | PiiCategory::Email
            | PiiCategory::FullAddress
            | PiiCategory::PostalCode
            | PiiCategory::LegalProcess
            | PiiCategory::PersonName => Severity::Moderate,
        }
    }

    /// Whether this is one of the LGPD sensitive-topic categories.
    pub fn is_sensitive(&self) -> bool {
        matches!(
            self,
            PiiCategory::SensitiveHealth
                | PiiCategory::SensitiveMinor
                | PiiCategory::SensitiveSocial
                | PiiCategory::SensitiveRace
                | PiiCategory::SensitiveGender
        )
    }

    /// Whether this category identifies a specific person on its own.
    ///
    /// These gate the sensitive-topic scanner: a sensitive phrase is only
    /// flagged when one of these was found in the same text.
    pub fn is_identifier(&self) -> bool {
        matches!(
            self,
            PiiCategory::IndividualTaxId | PiiCategory::GeneralRegistry | PiiCategory::PersonName
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_partition_is_exhaustive() {
        for cat in PiiCategory::ALL {
            // Every variant maps to exactly one tier without panicking.
            let _ = cat.severity();
        }
    }

    #[test]
    fn sensitive_categories_are_critical() {
        for cat in PiiCategory::ALL {
            if cat.is_sensitive() {
                assert_eq!(cat.severity(), Severity::Critical, "{}", cat.name());
            }
        }
    }

    #[test]
    fn wire_names_match_serde() {
        for cat in PiiCategory::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.name()));
        }
    }

    #[test]
    fn identifiers_are_non_sensitive() {
        for cat in PiiCategory::ALL {
            if cat.is_identifier() {
                assert!(!cat.is_sensitive(), "{}", cat.name());
            }
        }
    }
}
