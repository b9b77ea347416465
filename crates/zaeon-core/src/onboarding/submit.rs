use super::draft::Draft;
use super::role::Role;

/// Where completed onboarding sends the user.
pub const SIGNUP_PATH: &str = "/signup";

/// Query pairs in submission order. `ensino` only for roles that ask it.
pub fn signup_params<'a>(role: Role, draft: &'a Draft) -> Vec<(&'static str, &'a str)> {
    let mut params = vec![
        ("role", role.slug()),
        ("id", draft.id.as_str()),
        ("nome", draft.nome.as_str()),
        ("email", draft.email.as_str()),
        ("celular", draft.celular.as_str()),
    ];
    if role.asks_ensino() {
        params.push(("ensino", draft.ensino.as_str()));
    }
    params
}

/// `/signup?role=…&id=…` with every value percent-encoded.
pub fn signup_url(role: Role, draft: &Draft) -> String {
    let query = signup_params(role, draft)
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", SIGNUP_PATH, query)
}
