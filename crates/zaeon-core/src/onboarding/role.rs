use serde::{Deserialize, Serialize};

/// The user categories offered by the role picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Estudante,
    Pesquisador,
    Profissional,
    Empresario,
}

impl Role {
    /// Carousel order.
    pub const ALL: [Role; 4] = [
        Role::Estudante,
        Role::Pesquisador,
        Role::Profissional,
        Role::Empresario,
    ];

    /// Query-string value.
    pub fn slug(self) -> &'static str {
        match self {
            Role::Estudante => "estudante",
            Role::Pesquisador => "pesquisador",
            Role::Profissional => "profissional",
            Role::Empresario => "empresario",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Estudante => "Estudante",
            Role::Pesquisador => "Pesquisador",
            Role::Profissional => "Profissional",
            Role::Empresario => "Empresário",
        }
    }

    /// Prompt shown above the identifier field.
    pub fn id_prompt(self) -> &'static str {
        match self {
            Role::Estudante => "Digite seu CPF",
            Role::Pesquisador => "Informe seu ORCID ou ID Lattes",
            Role::Profissional => "Digite seu CPF (ou CNPJ)",
            Role::Empresario => "Digite o CNPJ da sua empresa",
        }
    }

    /// Format hint for the identifier field. Display only; the identifier
    /// validator does not enforce it.
    pub fn id_placeholder(self) -> &'static str {
        match self {
            Role::Estudante => "000.000.000-00",
            Role::Pesquisador => "0000-0001-2345-6789 (ORCID) · ou URL Lattes",
            Role::Profissional => "CPF ou CNPJ",
            Role::Empresario => "00.000.000/0001-00",
        }
    }

    /// Whether onboarding asks about completed secondary education.
    pub fn asks_ensino(self) -> bool {
        self != Role::Pesquisador
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_slug(role.slug()), Some(role));
        }
        assert_eq!(Role::from_slug("admin"), None);
    }

    #[test]
    fn only_pesquisador_skips_ensino() {
        let skipping: Vec<Role> = Role::ALL.into_iter().filter(|r| !r.asks_ensino()).collect();
        assert_eq!(skipping, vec![Role::Pesquisador]);
    }

    #[test]
    fn serializes_as_slug() {
        assert_eq!(serde_json::to_string(&Role::Empresario).unwrap(), r#""empresario""#);
    }
}
