//! 预定义夹具集合
//!
//! 种子数据库所需的四张表：预订、社区成员、活动参与者和社区。
//! 可直接生成，也可以用 `show` 命令导出后修改为自定义夹具。

use super::spec::FixtureSpec;

/// 每张表默认抽取的记录数
pub const DEFAULT_RECORD_COUNT: usize = 100;

/// 社区名称，第 i 条社区记录使用第 i 个名称
const COMMUNITY_NAMES: [&str; 100] = [
    "Harmonic Horizons",
    "Sonic Syndicate",
    "Rhythm Reverie",
    "The Groove Circle",
    "The Melody Makers",
    "Beatwave Collective",
    "Crescendo Crew",
    "Soul Sync Society",
    "Acoustic Alliance",
    "Soundwave Junction",
    "Echo Ensemble",
    "The Jazz Haven",
    "Tempo Tribe",
    "Fusion Frequencies",
    "Vibe Vault",
    "The Keynote Collective",
    "Serenade Society",
    "The Beatnik Brigade",
    "Chord Connectors",
    "Sonic Bloom",
    "Melody Caravan",
    "Cosmic Choir",
    "Bassline Brotherhood",
    "Pulse Pioneers",
    "Rhythm Nomads",
    "The Acoustic Ambassadors",
    "Syncopation Syndicate",
    "Treble Trails",
    "Tone Tinkerers",
    "Harmony Hangout",
    "Groove Architects",
    "Songcraft Society",
    "Frequency Frontier",
    "Dreamtone Collective",
    "Riff & Rhythm Assembly",
    "Vinyl Vanguards",
    "The Tempo Travelers",
    "Sound Striders",
    "Harmonic Pilgrims",
    "Lyrical Legends",
    "The Chord Explorers",
    "Synthwave Sanctuary",
    "The Beat Bazaar",
    "Echo Chamber Union",
    "Sonic Architects",
    "The Crescendo Coalition",
    "Serenade Seekers",
    "Songbird Syndicate",
    "Groove Nomads",
    "Frequency Friends",
    "Tone Explorers",
    "Bassline Bound",
    "Melody Nexus",
    "Jazz Odyssey",
    "Rhythm & Roots Collective",
    "The Harmonic Hub",
    "Synthwave Trailblazers",
    "The Beat Haven",
    "Chord Caravan",
    "Sonic Fusion Society",
    "Serenade Travelers",
    "Sound Sphere Assembly",
    "The Vibe Collective",
    "Acoustic Elevation",
    "Frequency Nomads",
    "The Tempo Syndicate",
    "Harmonic Odyssey",
    "Bassline Explorers",
    "Groove Sphere",
    "Tone Wanderers",
    "Riff Collective",
    "Serenade Junction",
    "The Jazz Syndicate",
    "Sonic Expedition",
    "The Groove Nexus",
    "Melodic Adventures",
    "Pulse Explorers",
    "The Crescendo Syndicate",
    "Chord & Cadence Crew",
    "Frequency Travelers",
    "Echo Odyssey",
    "Acoustic Navigators",
    "Harmonic Explorers",
    "Groovebound Collective",
    "Bassline Brotherhood",
    "The Melody Travelers",
    "Rhythm Realm",
    "Jazz Voyager Society",
    "The Tone Caravan",
    "Sound Haven Society",
    "Pulse Patterns Collective",
    "Echo & Rhythm Assembly",
    "The Groove Garden",
    "Acoustic Chronicles",
    "Melody Wanderers",
    "Tempo Travelers Union",
    "Sonic Wavefront",
    "Serenade Society Junction",
    "Harmonic Hikers",
    "Soundwave Explorers",
];

/// 流派
const GENRES: [&str; 15] = [
    "Jazz",
    "Classical",
    "Hip-Hop",
    "Electronic",
    "Folk",
    "Blues",
    "Rock",
    "Pop",
    "Reggae",
    "Indie",
    "Country",
    "Metal",
    "Synthwave",
    "R&B",
    "World Music",
];

/// 社区描述模板，`{Genre}` 替换为同一条记录的流派
const DESCRIPTIONS: [&str; 10] = [
    "A vibrant group celebrating the roots and rhythms of {Genre}.",
    "Where musicians explore innovative {Genre} fusion projects.",
    "Dedicated to preserving the traditions and sounds of {Genre}.",
    "An experimental community redefining the future of {Genre}.",
    "Connecting global fans and creators of {Genre}.",
    "Monthly jam sessions to dive deep into {Genre} vibes.",
    "A hub for emerging artists in the {Genre} scene.",
    "Focused on collaborative projects that push the boundaries of {Genre}.",
    "Join us for discussions on the evolution of {Genre}.",
    "Live performances and workshops for {Genre} enthusiasts.",
];

/// 预定义夹具集合
///
/// 提供种子数据各表的预配置定义，无需手动构建。
pub struct PredefinedFixtures;

impl PredefinedFixtures {
    /// 预订
    ///
    /// 活动 ID 取 [1, 101)，用户 ID 取 [1, 102)。同一用户不能重复预订
    /// 同一活动，因此按 (EventId, UserId) 去重，并包裹在事务中。
    pub fn bookings() -> FixtureSpec {
        FixtureSpec::builder("bookings", "Bookings")
            .description("活动预订：随机 (EventId, UserId)，去重，事务包裹")
            .record_count(DEFAULT_RECORD_COUNT)
            .integer("EventId", 1..101)
            .integer("UserId", 1..102)
            .dedupe(true)
            .wrap_in_transaction(true)
            .build()
    }

    /// 社区成员
    ///
    /// 与预订相同的抽取方式，键为 (CommunityId, UserId)。
    pub fn community_members() -> FixtureSpec {
        FixtureSpec::builder("community_members", "CommunityMembers")
            .description("社区成员：随机 (CommunityId, UserId)，去重，事务包裹")
            .record_count(DEFAULT_RECORD_COUNT)
            .integer("CommunityId", 1..101)
            .integer("UserId", 1..102)
            .dedupe(true)
            .wrap_in_transaction(true)
            .build()
    }

    /// 活动参与者
    ///
    /// 允许重复记录，也不包裹事务。
    pub fn event_attendees() -> FixtureSpec {
        FixtureSpec::builder("event_attendees", "EventAttendees")
            .description("活动参与者：随机 (EventId, UserId)，允许重复")
            .record_count(DEFAULT_RECORD_COUNT)
            .integer("EventId", 1..101)
            .integer("UserId", 1..102)
            .build()
    }

    /// 社区
    ///
    /// 名称按顺序取自名称列表，流派随机抽取，描述从模板中随机抽取并
    /// 代入同一条记录的流派。
    pub fn communities() -> FixtureSpec {
        FixtureSpec::builder("communities", "Communities")
            .description("社区：顺序名称 + 随机流派 + 按流派生成的描述")
            .record_count(DEFAULT_RECORD_COUNT)
            .sequence("Name", COMMUNITY_NAMES)
            .choice("Genre", GENRES)
            .template("Description", DESCRIPTIONS)
            .build()
    }

    /// 获取所有预定义夹具
    pub fn all() -> Vec<FixtureSpec> {
        vec![
            Self::bookings(),
            Self::community_members(),
            Self::event_attendees(),
            Self::communities(),
        ]
    }

    /// 根据名称获取夹具
    pub fn get(name: &str) -> Option<FixtureSpec> {
        match name {
            "bookings" => Some(Self::bookings()),
            "community_members" => Some(Self::community_members()),
            "event_attendees" => Some(Self::event_attendees()),
            "communities" => Some(Self::communities()),
            _ => None,
        }
    }

    /// 获取所有夹具名称
    pub fn names() -> Vec<&'static str> {
        vec![
            "bookings",
            "community_members",
            "event_attendees",
            "communities",
        ]
    }
}

// ---------------------------------------------------------------------------
// 单元测试
// ---------------------------------------------------------------------------
