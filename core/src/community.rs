//! Static community figures shown on the leaderboard.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommunityStats {
    pub total_founders: u32,
    pub validated_ideas: u32,
    /// Millions of tokens.
    pub funds_raised: f64,
    pub founders_with_guidance: u32,
}

pub const COMMUNITY_STATS: CommunityStats = CommunityStats {
    total_founders: 1247,
    validated_ideas: 342,
    funds_raised: 2.5,
    founders_with_guidance: 856,
};
