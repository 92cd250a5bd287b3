// GitHub API endpoint functions.
// Typed access to the public repository listing for a user.

use crate::error::Result;

use super::client::GitHubClient;

/// Repositories returned per page. The listing API caps at 100.
pub const PER_PAGE: u32 = 100;

impl GitHubClient {
    /// Fetch one page of a user's repository listing as raw response bytes.
    ///
    /// The body is cached verbatim on disk, so deserialization is deferred
    /// to the merge stage.
    pub async fn list_user_repos(&self, user: &str, page: u32) -> Result<Vec<u8>> {
        let params = [
            ("per_page", PER_PAGE.to_string()),
            ("page", page.to_string()),
        ];
        let response = self
            .get_with_params(&format!("/users/{}/repos", user), &params)
            .await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
