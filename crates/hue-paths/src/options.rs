/// Parameters of a shortest-path table build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightOptions {
    /// Inclusive hop ceiling. Zero means unlimited; a negative ceiling
    /// leaves only the source accessible.
    pub max_distance: i32,
    /// Honor color-match links between non-adjacent cells.
    pub allow_teleport: bool,
}

impl WeightOptions {
    /// Reach of a player command: six hops, teleports allowed.
    pub const PLAYER: Self = Self {
        max_distance: 6,
        allow_teleport: true,
    };

    /// The AI opponent plans over the whole map, teleports allowed.
    pub const SEEKER: Self = Self {
        max_distance: 0,
        allow_teleport: true,
    };

    pub const fn with_max_distance(mut self, max_distance: i32) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub const fn with_teleport(mut self, allow_teleport: bool) -> Self {
        self.allow_teleport = allow_teleport;
        self
    }

    /// Whether a cell settled at `distance` may relax its neighbors.
    #[inline]
    pub(crate) fn can_expand(self, distance: i32) -> bool {
        self.max_distance == 0 || distance < self.max_distance
    }
}
