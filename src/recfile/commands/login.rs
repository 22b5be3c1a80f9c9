use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RecfileError, Result};
use crate::model::Credential;
use crate::store::LineStore;

pub fn run<S: LineStore>(
    store: &S,
    users_file: &str,
    email: &str,
    password: &str,
) -> Result<CmdResult> {
    let Some(lines) = store.load(users_file)? else {
        return Err(RecfileError::NoUsersRegistered);
    };

    // First match wins. Comparison is exact and case-sensitive; passwords
    // are stored and checked in plain text by design of the format.
    let matched = lines
        .iter()
        .filter_map(|line| Credential::parse(line))
        .find(|cred| cred.email == email && cred.password == password);

    match matched {
        Some(_) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success("Login successful"));
            Ok(result)
        }
        None => Err(RecfileError::InvalidCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    const USERS: &str = "users.txt";

    #[test]
    fn succeeds_with_matching_credentials() {
        let fixture = StoreFixture::new().with_user(USERS, "a@b.c", "pw");
        let result = run(&fixture.store, USERS, "a@b.c", "pw").unwrap();
        assert_eq!(result.messages[0].content, "Login successful");
    }

    #[test]
    fn fails_with_wrong_password() {
        let fixture = StoreFixture::new().with_user(USERS, "a@b.c", "pw");
        let err = run(&fixture.store, USERS, "a@b.c", "wrong").unwrap_err();
        assert!(matches!(err, RecfileError::InvalidCredentials));
    }

    #[test]
    fn fails_when_no_users_file_exists() {
        let store = InMemoryStore::new();
        let err = run(&store, USERS, "a@b.c", "pw").unwrap_err();
        assert!(matches!(err, RecfileError::NoUsersRegistered));
    }

    #[test]
    fn empty_users_file_is_invalid_credentials_not_missing() {
        let fixture = StoreFixture::new().with_file(USERS, &[]);
        let err = run(&fixture.store, USERS, "a@b.c", "pw").unwrap_err();
        assert!(matches!(err, RecfileError::InvalidCredentials));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let fixture = StoreFixture::new().with_user(USERS, "a@b.c", "pw");
        let err = run(&fixture.store, USERS, "a@b.c", "PW").unwrap_err();
        assert!(matches!(err, RecfileError::InvalidCredentials));
    }

    #[test]
    fn malformed_lines_are_skipped_during_the_scan() {
        let fixture = StoreFixture::new()
            .with_file(USERS, &["not json"])
            .with_user(USERS, "a@b.c", "pw");
        let result = run(&fixture.store, USERS, "a@b.c", "pw").unwrap();
        assert_eq!(result.messages[0].content, "Login successful");
    }

    #[test]
    fn first_matching_record_wins() {
        // Duplicate emails can exist if the file was edited by hand; the
        // scan stops at the first full match.
        let fixture = StoreFixture::new()
            .with_user(USERS, "a@b.c", "first")
            .with_user(USERS, "a@b.c", "second");
        assert!(run(&fixture.store, USERS, "a@b.c", "first").is_ok());
        assert!(run(&fixture.store, USERS, "a@b.c", "second").is_ok());
    }
}
