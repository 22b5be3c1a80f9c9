use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RecfileError, Result};
use crate::model::Credential;
use crate::store::LineStore;

pub fn run<S: LineStore>(
    store: &mut S,
    users_file: &str,
    email: &str,
    password: &str,
) -> Result<CmdResult> {
    let lines = store.load(users_file)?.unwrap_or_default();

    // Unparsable lines are skipped, not fatal; the uniqueness check only
    // sees records that round-trip.
    let exists = lines
        .iter()
        .filter_map(|line| Credential::parse(line))
        .any(|cred| cred.email == email);
    if exists {
        return Err(RecfileError::DuplicateUser);
    }

    let cred = Credential::new(email, password);
    store.append(users_file, &cred.to_line()?)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Registered {}", email)));
    Ok(result)
}
