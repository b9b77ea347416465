//! Onboarding steps and their validators.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::draft::Draft;
use super::role::Role;

/// One field of the onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Role-specific identifier (CPF, CNPJ, ORCID...).
    Id,
    /// Full name.
    Nome,
    Email,
    /// Mobile phone.
    Celular,
    /// "Concluiu o ensino médio?" yes/no.
    Ensino,
}

const WITH_ENSINO: [Step; 5] = [Step::Id, Step::Nome, Step::Email, Step::Celular, Step::Ensino];
const WITHOUT_ENSINO: [Step; 4] = [Step::Id, Step::Nome, Step::Email, Step::Celular];

impl Step {
    /// The ordered steps a role goes through.
    pub fn sequence(role: Role) -> &'static [Step] {
        if role.asks_ensino() {
            &WITH_ENSINO
        } else {
            &WITHOUT_ENSINO
        }
    }

    /// Label shown beside the field.
    pub fn label(self, role: Role) -> &'static str {
        match self {
            Step::Id => role.id_prompt(),
            Step::Nome => "Nome completo",
            Step::Email => "E-mail",
            Step::Celular => "Celular",
            Step::Ensino => "Concluiu o ensino médio?",
        }
    }

    pub fn placeholder(self, role: Role) -> &'static str {
        match self {
            Step::Id => role.id_placeholder(),
            Step::Nome => "Seu nome e sobrenome",
            Step::Email => "voce@email.com",
            Step::Celular => "(00) 90000-0000",
            Step::Ensino => "",
        }
    }

    /// Text steps have an input that can be empty; `Ensino` is a radio pair.
    pub fn is_text(self) -> bool {
        self != Step::Ensino
    }

    /// Whether the draft satisfies this step.
    pub fn validate(self, draft: &Draft) -> bool {
        match self {
            Step::Id => valid_id(&draft.id),
            Step::Nome => valid_nome(&draft.nome),
            Step::Email => valid_email(&draft.email),
            Step::Celular => valid_celular(&draft.celular),
            Step::Ensino => true,
        }
    }
}

/// Length check only; the per-role formats are hints, not rules.
pub fn valid_id(value: &str) -> bool {
    value.trim().chars().count() > 3
}

pub fn valid_nome(value: &str) -> bool {
    value.trim().chars().count() > 2
}

/// Loose shape check: something, `@`, something, `.`, something.
pub fn valid_email(value: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
        .is_match(value)
}

/// At least ten digits once punctuation and spaces are stripped.
pub fn valid_celular(value: &str) -> bool {
    value.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_length_by_role() {
        for role in Role::ALL {
            let steps = Step::sequence(role);
            let expected = if role == Role::Pesquisador { 4 } else { 5 };
            assert_eq!(steps.len(), expected, "{:?}", role);
            assert_eq!(steps.contains(&Step::Ensino), role != Role::Pesquisador);
            assert_eq!(steps[0], Step::Id);
        }
    }

    #[test]
    fn id_needs_four_trimmed_chars() {
        assert!(!valid_id("12"));
        assert!(!valid_id("123"));
        assert!(!valid_id("  123  "));
        assert!(valid_id("1234"));
        // no format enforcement
        assert!(valid_id("abcd"));
    }

    #[test]
    fn nome_needs_three_trimmed_chars() {
        assert!(!valid_nome("Al"));
        assert!(!valid_nome("  Al "));
        assert!(valid_nome("Ana"));
        assert!(valid_nome("Ana Silva"));
    }

    #[test]
    fn email_shape() {
        assert!(valid_email("ana@x.com"));
        assert!(valid_email("a.b+c@sub.domain.org"));
        assert!(!valid_email("ana@x"));
        assert!(!valid_email("ana.x.com"));
        assert!(!valid_email("@x.com"));
        assert!(!valid_email(""));
    }

    #[test]
    fn celular_counts_digits() {
        assert!(valid_celular("11999999999"));
        assert!(valid_celular("(11) 99999-9999"));
        assert!(valid_celular("1199999999"));
        assert!(!valid_celular("119999999"));
        assert!(!valid_celular("(11) 9999-999"));
        assert!(!valid_celular("phone"));
    }

    #[test]
    fn ensino_always_valid() {
        assert!(Step::Ensino.validate(&Draft::default()));
    }

    #[test]
    fn labels_follow_role() {
        assert_eq!(Step::Id.label(Role::Estudante), "Digite seu CPF");
        assert_eq!(Step::Id.placeholder(Role::Empresario), "00.000.000/0001-00");
        assert_eq!(Step::Email.label(Role::Pesquisador), "E-mail");
    }
}
