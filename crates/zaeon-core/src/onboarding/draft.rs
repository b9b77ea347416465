use serde::{Deserialize, Serialize};

use super::step::Step;

/// Answer to the secondary-education question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ensino {
    #[default]
    Sim,
    Nao,
}

impl Ensino {
    pub fn as_str(self) -> &'static str {
        match self {
            Ensino::Sim => "sim",
            Ensino::Nao => "nao",
        }
    }
}

/// In-progress answers for one onboarding session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub id: String,
    pub nome: String,
    pub email: String,
    pub celular: String,
    pub ensino: Ensino,
}

impl Draft {
    /// Raw value of a step's field.
    pub fn value(&self, step: Step) -> &str {
        match step {
            Step::Id => &self.id,
            Step::Nome => &self.nome,
            Step::Email => &self.email,
            Step::Celular => &self.celular,
            Step::Ensino => self.ensino.as_str(),
        }
    }

    /// Overwrite a text field. Ignored for `Ensino`, which is set with
    /// `ensino` directly.
    pub fn set(&mut self, step: Step, value: String) {
        match step {
            Step::Id => self.id = value,
            Step::Nome => self.nome = value,
            Step::Email => self.email = value,
            Step::Celular => self.celular = value,
            Step::Ensino => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_draft_is_empty_with_sim() {
        let d = Draft::default();
        assert!(d.id.is_empty() && d.nome.is_empty() && d.email.is_empty() && d.celular.is_empty());
        assert_eq!(d.ensino, Ensino::Sim);
        assert_eq!(d.value(Step::Ensino), "sim");
    }

    #[test]
    fn set_and_read_back() {
        let mut d = Draft::default();
        d.set(Step::Email, "ana@x.com".into());
        d.set(Step::Ensino, "nao".into());
        assert_eq!(d.value(Step::Email), "ana@x.com");
        assert_eq!(d.ensino, Ensino::Sim);
    }
}
