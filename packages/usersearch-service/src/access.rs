/// Request header carrying the credential.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Exactly one credential is accepted. Absent and empty values never match.
pub fn is_authorized(expected: &str, presented: Option<&str>) -> bool {
	if expected.is_empty() {
		return false;
	}

	presented.is_some_and(|token| token == expected)
}
