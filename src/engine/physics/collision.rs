use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
///
/// Ground probes query against `Ground` only, so hitboxes and other
/// characters never count as floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// Player character hitboxes
    Player = 0b0000_0010,

    /// Static terrain the character can stand on
    Ground = 0b0000_0100,

    /// Sensors (trigger zones, etc.) - don't cause physical collision
    Sensor = 0b0000_1000,
}

impl CollisionGroups {
    /// Raw membership bits, as used by overlap queries
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Players stand on ground and trip sensors, but pass through each other
            CollisionGroups::Player => Group::from_bits_truncate(
                CollisionGroups::Ground as u32 | CollisionGroups::Sensor as u32,
            ),

            // Ground collides with everything except sensors
            CollisionGroups::Ground => Group::from_bits_truncate(
                CollisionGroups::Player as u32
                    | CollisionGroups::Ground as u32
                    | CollisionGroups::Default as u32,
            ),

            CollisionGroups::Sensor => Group::ALL,
            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }

    /// Interaction groups for a query that should only hit colliders in `layer_mask`
    pub fn query_groups(layer_mask: u32) -> InteractionGroups {
        InteractionGroups::new(Group::ALL, Group::from_bits_truncate(layer_mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_groups_bits() {
        let groups = [
            CollisionGroups::Default,
            CollisionGroups::Player,
            CollisionGroups::Ground,
            CollisionGroups::Sensor,
        ];

        for (i, group1) in groups.iter().enumerate() {
            for (j, group2) in groups.iter().enumerate() {
                if i != j {
                    assert_ne!(group1.bits(), group2.bits(), "Groups must have unique bits");
                }
            }
        }
    }

    #[test]
    fn test_player_doesnt_collide_with_player() {
        let player_groups = CollisionGroups::Player.to_interaction_groups();
        assert!(
            !player_groups.filter.contains(player_groups.memberships),
            "Players should not collide with other players"
        );
    }

    #[test]
    fn test_ground_query_ignores_player() {
        let query = CollisionGroups::query_groups(CollisionGroups::Ground.bits());
        let player = CollisionGroups::Player.to_interaction_groups();
        let ground = CollisionGroups::Ground.to_interaction_groups();

        assert!(query.test(ground));
        assert!(!query.test(player));
    }
}
