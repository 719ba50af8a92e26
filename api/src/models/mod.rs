// API request/response models
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::{LeaderboardEntry, Project};
use crate::entity::{startups, team_members, users};

/// Upper bound for `limit` on paginated endpoints
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Custom deserializer to convert string to u64
fn deserialize_string_to_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    s.parse::<u64>().map_err(serde::de::Error::custom)
}

/// Common pagination parameters for API endpoints
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page", deserialize_with = "deserialize_string_to_u64")]
    pub page: u64,
    #[serde(default = "default_limit", deserialize_with = "deserialize_string_to_u64")]
    pub limit: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationParams {
    /// Page number clamped to at least 1
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    /// Page size clamped to 1..=MAX_PAGE_LIMIT
    pub fn limit(&self) -> u64 {
        self.limit.clamp(1, MAX_PAGE_LIMIT)
    }

    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

/// Pagination metadata for responses
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(total: u64, params: &PaginationParams) -> Self {
        let limit = params.limit();
        Self {
            total,
            page: params.page(),
            limit,
            total_pages: total.div_ceil(limit),
        }
    }
}

/// Response structure with pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: T,
    pub pagination: PaginationMeta,
}

/// Startup categories accepted on submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Web2,
    Web3,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Web2 => "Web2",
            Category::Web3 => "Web3",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Web2" => Ok(Category::Web2),
            "Web3" => Ok(Category::Web3),
            other => Err(format!("category must be Web2 or Web3, got '{}'", other)),
        }
    }
}

/// Parses an optional `category` query parameter
pub fn parse_category_filter(raw: Option<&str>) -> Result<Option<Category>, String> {
    raw.map(str::parse).transpose()
}

/// Account role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Builder,
    Investor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Builder => "builder",
            UserRole::Investor => "investor",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "builder" => Ok(UserRole::Builder),
            "investor" => Ok(UserRole::Investor),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field))
    } else {
        Ok(())
    }
}

/// Trims an optional text field, treating blank input as absent
pub fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Query parameters for GET /startups
#[derive(Debug, Deserialize, Default)]
pub struct ListStartupsQuery {
    pub category: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Response structure for GET /startups
#[derive(Debug, Serialize)]
pub struct StartupsResponse {
    pub startups: Vec<startups::Model>,
}

/// Request body for POST /startups
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateStartupRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub stage: Option<String>,
    pub users: Option<String>,
    pub growth: Option<String>,
    pub tagline: Option<String>,
    pub vision: Option<String>,
    pub funding: Option<String>,
    pub revenue: Option<String>,
    pub founder_name: Option<String>,
    pub founder_email: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub submitted_by: Option<Uuid>,
}

impl CreateStartupRequest {
    /// Checks the required fields. Display fields such as growth are accepted as-is.
    pub fn validate(&self) -> Result<Category, String> {
        require_text("name", &self.name)?;
        require_text("description", &self.description)?;
        self.category.trim().parse()
    }
}

/// Request body for PUT /startups/{id}; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStartupRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stage: Option<String>,
    pub users: Option<String>,
    pub growth: Option<String>,
    pub tagline: Option<String>,
    pub vision: Option<String>,
    pub funding: Option<String>,
    pub revenue: Option<String>,
    pub founder_name: Option<String>,
    pub founder_email: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl UpdateStartupRequest {
    pub fn validate(&self) -> Result<Option<Category>, String> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(description) = &self.description {
            require_text("description", description)?;
        }
        self.category
            .as_deref()
            .map(|c| c.trim().parse())
            .transpose()
    }
}

/// Query parameters for GET /leaderboard
#[derive(Debug, Deserialize, Default)]
pub struct LeaderboardQuery {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

/// Response structure for GET /leaderboard
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub total: usize,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Response structure for GET /projects
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

/// Request body for POST /startups/{id}/team
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub role: String,
    pub linkedin: Option<String>,
}

impl CreateTeamMemberRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_text("name", &self.name)?;
        require_text("role", &self.role)
    }
}

/// Response structure for GET /startups/{id}/team
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub startup_id: i32,
    pub members: Vec<team_members::Model>,
}

/// Request body for POST /users
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

impl CreateUserRequest {
    /// Returns the normalized (trimmed, lower-cased) email
    pub fn validate(&self) -> Result<String, String> {
        require_text("display_name", &self.display_name)?;

        let email = self.email.trim().to_lowercase();
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && domain.contains('.') && !email.contains(char::is_whitespace) =>
            {
                Ok(email)
            }
            _ => Err(format!("'{}' is not a valid email address", self.email.trim())),
        }
    }
}

/// Request body for PUT /users/{id}/wallet
#[derive(Debug, Clone, Deserialize)]
pub struct LinkWalletRequest {
    pub wallet_address: String,
}

impl LinkWalletRequest {
    /// Shape check only: the address is not verified on any chain.
    /// Accepts EVM style `0x` + 40 hex digits, or a 32-44 character base58 address.
    pub fn validate(&self) -> Result<String, String> {
        let address = self.wallet_address.trim();

        let is_evm = address
            .strip_prefix("0x")
            .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()));
        let is_base58 = (32..=44).contains(&address.len())
            && address
                .chars()
                .all(|c| c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l'));

        if is_evm || is_base58 {
            Ok(address.to_string())
        } else {
            Err(format!("'{}' is not a supported wallet address", address))
        }
    }
}

/// Response structure for GET /users/{id}/dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: users::Model,
    pub role: UserRole,
    /// Builders: their own startups with their overall rank.
    /// Investors: the top of the leaderboard.
    pub startups: Vec<LeaderboardEntry>,
}

/// Response structure for GET /investors
#[derive(Debug, Serialize)]
pub struct InvestorsResponse {
    pub investors: Vec<users::Model>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn startup_request() -> CreateStartupRequest {
        CreateStartupRequest {
            name: "ShelfSense".to_string(),
            description: "Empty shelf detection".to_string(),
            category: "Web2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn pagination_clamps_and_computes_offset() {
        let params = PaginationParams { page: 3, limit: 500 };
        assert_eq!(params.limit(), MAX_PAGE_LIMIT);
        assert_eq!(params.offset(), 200);

        let params = PaginationParams { page: 0, limit: 0 };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn pagination_meta_rounds_pages_up() {
        let params = PaginationParams { page: 1, limit: 20 };
        assert_eq!(PaginationMeta::new(41, &params).total_pages, 3);
        assert_eq!(PaginationMeta::new(0, &params).total_pages, 0);
    }

    #[test]
    fn accepts_valid_startup_submission() {
        assert_eq!(startup_request().validate(), Ok(Category::Web2));
    }

    #[test]
    fn rejects_missing_required_fields() {
        let mut request = startup_request();
        request.name = "   ".to_string();
        assert!(request.validate().unwrap_err().contains("name"));

        let mut request = startup_request();
        request.description = String::new();
        assert!(request.validate().unwrap_err().contains("description"));
    }

    #[test]
    fn rejects_unknown_category() {
        let mut request = startup_request();
        request.category = "AI".to_string();
        assert!(request.validate().is_err());

        request.category = "web3".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn growth_is_not_validated_on_submission() {
        let mut request = startup_request();
        request.growth = Some("huge".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn update_validates_only_present_fields() {
        assert_eq!(UpdateStartupRequest::default().validate(), Ok(None));

        let request = UpdateStartupRequest {
            category: Some("Web3".to_string()),
            ..Default::default()
        };
        assert_eq!(request.validate(), Ok(Some(Category::Web3)));

        let request = UpdateStartupRequest {
            name: Some("".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn category_filter_parsing() {
        assert_eq!(parse_category_filter(None), Ok(None));
        assert_eq!(parse_category_filter(Some("Web3")), Ok(Some(Category::Web3)));
        assert!(parse_category_filter(Some("Web4")).is_err());
    }

    #[test]
    fn normalizes_user_email() {
        let request = CreateUserRequest {
            email: "  Founder@Example.COM ".to_string(),
            display_name: "Ada".to_string(),
            role: UserRole::Builder,
        };
        assert_eq!(request.validate(), Ok("founder@example.com".to_string()));
    }

    #[test]
    fn rejects_bad_user_input() {
        let mut request = CreateUserRequest {
            email: "not-an-email".to_string(),
            display_name: "Ada".to_string(),
            role: UserRole::Investor,
        };
        assert!(request.validate().is_err());

        request.email = "ada@example.com".to_string();
        request.display_name = " ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn wallet_address_shapes() {
        let evm = LinkWalletRequest {
            wallet_address: " 0x52908400098527886E0F7030069857D2E4169EE7 ".to_string(),
        };
        assert_eq!(
            evm.validate(),
            Ok("0x52908400098527886E0F7030069857D2E4169EE7".to_string())
        );

        let solana = LinkWalletRequest {
            wallet_address: "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM".to_string(),
        };
        assert!(solana.validate().is_ok());

        for bad in ["", "0x123", "hello world", "0xZZ908400098527886E0F7030069857D2E4169EE7"] {
            let request = LinkWalletRequest {
                wallet_address: bad.to_string(),
            };
            assert!(request.validate().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn user_role_round_trips_through_serde() {
        let role: UserRole = serde_json::from_str("\"investor\"").unwrap();
        assert_eq!(role, UserRole::Investor);
        assert_eq!("builder".parse::<UserRole>(), Ok(UserRole::Builder));
    }
}
