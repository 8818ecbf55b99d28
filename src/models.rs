use serde::{Deserialize, Serialize};

/// Shape of the `user` resource. The store itself holds raw JSON; this type
/// backs the built-in fallback and test assertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub total_donations: u64,
    pub rank: u32,
    pub referrals: u64,
    pub this_month: u64,
    pub last_month: u64,
}

/// One row of the `leaderboard` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub amount: u64,
    pub referrals: u64,
    pub rank: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub success: bool,
    pub message: String,
    pub user_loaded: bool,
    pub leaderboard_loaded: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub data_sources: DataSources,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DataSources {
    pub user: bool,
    pub leaderboard: bool,
}

/// Served when no `user.json` has ever loaded.
pub fn fallback_user() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        referral_code: "REF123456".to_string(),
        total_donations: 18_500,
        rank: 5,
        referrals: 15,
        this_month: 3_200,
        last_month: 2_800,
    }
}

/// Served when no `leaderboard.json` has ever loaded.
pub fn fallback_leaderboard() -> Vec<LeaderboardEntry> {
    let rows = [
        ("Sarah Johnson", 45_000, 25),
        ("Michael Chen", 38_000, 22),
        ("Emily Rodriguez", 32_000, 18),
        ("David Kim", 28_000, 20),
        ("John Doe", 18_500, 15),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, &(name, amount, referrals))| LeaderboardEntry {
            name: name.to_string(),
            amount,
            referrals,
            rank: index as u32 + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_user_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(fallback_user()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("referralCode"));
        assert!(object.contains_key("totalDonations"));
        assert!(object.contains_key("thisMonth"));
        assert!(object.contains_key("lastMonth"));
        assert_eq!(object["totalDonations"], 18_500);
    }

    #[test]
    fn fallback_leaderboard_is_ranked_and_ordered() {
        let board = fallback_leaderboard();
        assert_eq!(board.len(), 5);
        for (index, entry) in board.iter().enumerate() {
            assert_eq!(entry.rank, index as u32 + 1);
        }
        assert!(board.windows(2).all(|pair| pair[0].amount >= pair[1].amount));
    }

    #[test]
    fn reload_response_uses_camel_case_flags() {
        let value = serde_json::to_value(ReloadResponse {
            success: true,
            message: "Data reloaded successfully".to_string(),
            user_loaded: true,
            leaderboard_loaded: false,
        })
        .unwrap();
        assert_eq!(value["userLoaded"], true);
        assert_eq!(value["leaderboardLoaded"], false);
    }
}
