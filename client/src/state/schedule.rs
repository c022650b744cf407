//! Event timetable: the fixed, ordered agenda for the day.
//!
//! DESIGN
//! ======
//! The schedule is authored at compile time as `&'static` data and never
//! mutated. Entry order is on-page order; session order within an entry is
//! grid order. Optional fields carry explicit defaults (see
//! [`Session::is_sold_out`] and [`Speaker::avatar_url`]).

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Hosted asset URL from a path under the shared blob store.
macro_rules! image {
    ($path:literal) => {
        concat!("https://hebbkx1anhila5yf.public.blob.vercel-storage.com/", $path)
    };
}

/// Avatar shown for speakers without their own photo.
pub const PLACEHOLDER_AVATAR_URL: &str = image!("kagome_symbol_circle-nXt3WkJj062REZ1jLWrRPFtFhsiiIG.png");

/// Separator between speaker names on a collapsed session card.
pub const SPEAKER_NAME_SEPARATOR: &str = " / ";

/// How an agenda row is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Plain row (reception, breaks, opening); no sessions.
    Simple,
    /// Single-track block, sessions stacked in one column.
    Plenary,
    /// Parallel block, sessions laid out in a two-column grid.
    Breakout,
}

/// One agenda row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub start_time: &'static str,
    pub end_time: &'static str,
    /// May contain `\n`; each line renders on its own.
    pub event_label: &'static str,
    pub kind: EntryKind,
    pub duration_label: Option<&'static str>,
    /// Empty for [`EntryKind::Simple`].
    pub sessions: &'static [Session],
}

impl ScheduleEntry {
    const fn simple(start_time: &'static str, end_time: &'static str, event_label: &'static str) -> Self {
        Self { start_time, end_time, event_label, kind: EntryKind::Simple, duration_label: None, sessions: &[] }
    }

    /// `"start-end"` as shown on the row and in the detail dialog.
    #[must_use]
    pub fn time_range(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time)
    }

    /// Sessions to render as cards. Always empty for simple rows.
    #[must_use]
    pub fn sessions(&self) -> &'static [Session] {
        match self.kind {
            EntryKind::Simple => &[],
            EntryKind::Plenary | EntryKind::Breakout => self.sessions,
        }
    }

    #[must_use]
    pub fn has_sessions(&self) -> bool {
        !self.sessions().is_empty()
    }

    /// Session blocks get a coloured label pill in the timetable.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.kind != EntryKind::Simple
    }
}

/// One talk or panel inside a plenary/breakout block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub event_label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// `None` means not sold out.
    pub sold_out: Option<bool>,
    pub speakers: &'static [Speaker],
}

impl Session {
    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.sold_out.unwrap_or(false)
    }

    /// Speaker names for the collapsed card, e.g. `"A / B"`.
    #[must_use]
    pub fn speaker_names(&self) -> String {
        self.speakers
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
            .join(SPEAKER_NAME_SEPARATOR)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Speaker {
    pub name: &'static str,
    pub organization: &'static str,
    pub position: &'static str,
    pub info: Option<&'static str>,
    pub image: Option<&'static str>,
}

impl Speaker {
    /// Photo URL, or the placeholder avatar when none was supplied.
    #[must_use]
    pub fn avatar_url(&self) -> &'static str {
        self.image.unwrap_or(PLACEHOLDER_AVATAR_URL)
    }
}

const fn speaker(
    name: &'static str,
    organization: &'static str,
    position: &'static str,
    image: &'static str,
) -> Speaker {
    Speaker { name, organization, position, info: None, image: Some(image) }
}

// =============================================================================
// DATA
// =============================================================================

const PLENARY: &[Session] = &[Session {
    event_label: "全体会",
    title: "横浜の卒業生が語る、GLOBISや地域のつながりを活かした志の実現",
    description: "横浜にゆかりのある4名の登壇者を迎え、起業や社会活動を通じて得た体験や、その背景にある志についてお話しいただくパネルディスカッションを開催します。\n在学中に意識していたことや卒業後に感じていることなど、自己実現に向けての取り組みをお伝えします。\nネットワーキングの重要性や、コミュニティ形成の秘訣、そして予期せぬ出会いがもたらす価値についても掘り下げていきます。参加者の皆さまには、新たな視点や一歩を踏み出すためのきっかけを提供いたします。",
    sold_out: None,
    speakers: &[
        speaker(
            "高野 俊行氏 (GMBA2019期)",
            "ユニクル株式会社",
            "CEO",
            image!("%E5%85%A8%E4%BD%93%E4%BC%9A_%E9%AB%98%E9%87%8E%E3%81%95%E3%82%93-uKJhmvh7QUzX65dpUjHR55I2p9ujmL.png"),
        ),
        speaker(
            "大野 淳史氏 (GMBA2019期)",
            "TOPPANホールディングス",
            "事業開発本部ビジネスイノベーションセンター戦略投資部",
            image!("%E5%85%A8%E4%BD%93%E4%BC%9A_%E5%A4%A7%E9%87%8E%E3%81%95%E3%82%93-BzXER9riCrQo5zkM5RP8sF2qPVeigV.png"),
        ),
        speaker(
            "古野 直毅氏 (GMBA2021期)",
            "フィクスコンシェル株式会社",
            "代表取締役",
            image!("%E5%85%A8%E4%BD%93%E4%BC%9A_%E5%8F%A4%E9%87%8E%E3%81%95%E3%82%93-NqdsHVghFJ0ydRRjXEmratt7bs4OMJ.png"),
        ),
        speaker(
            "得能 淳氏 (GMBA2017期)",
            "グロービス経営大学院大学",
            "特設キャンパス責任者(横浜・仙台・水戸)",
            image!("%E5%85%A8%E4%BD%93%E4%BC%9A_%E5%BE%97%E8%83%BD%E3%81%95%E3%82%93-f8HrUSOJeeBOazuchJinl2O9pFiCyj.png"),
        ),
    ],
}];

const BREAKOUT_1: &[Session] = &[
    Session {
        event_label: "分科会A",
        title: "新規事業への挑戦\n〜対話を通して見えない枠を外してみよう〜",
        description: "思いついたアイディアを他の人に話すの恥ずかしい‥や、そんなの前例ないし‥とか、うまくいかなかったらどうしよう‥、のように、新しいことへの挑戦は自分の中に勝手に作っている見えない壁が原因であることが多いです。上手くいかないながらも聴覚障害者向けの事業を進めてきた私の事例をもとに、それだったら自分もできるかも、言われてみたら自分だけが気にしているだけかも、など、少しでも見えない壁を取り除き、一歩踏み出すきっかけを一緒に見つけられるようなセッションをご提供します。",
        sold_out: None,
        speakers: &[speaker(
            "岩田 佳子氏 (GMBA2022期)",
            "株式会社リコー",
            "",
            image!("%E6%96%B0%E8%A6%8F%E4%BA%8B%E6%A5%AD_%E5%B2%A9%E7%94%B0%E3%81%95%E3%82%93-uXFdwJ6pZEvHdz7iaUh2IFWk2PGTG4.png"),
        )],
    },
    Session {
        event_label: "分科会B",
        title: "ヨコハマ未来創造会議\n～フードサーキュラーを起点に子どもの可能性を最大化するには？～",
        description: "2027年に横浜で開催される、GREEN×EXPO 2027（2027年国際園芸博覧会）を契機に、現在の大学生や企業の若手社員の若者が参加して、将来の社会についての議論、共感、自分ごとの醸成を目指す「ヨコハマ未来創造会議」が本年横浜市で立ち上がりました。\n全部で5つのプロジェクトが進行中で、その中の「フードサーキュラーを起点に子どもの可能性を最大化するには？」に取り組んでいるチームの発表を行っていただきます。キーワードは、#フードロス、＃貧困解決、＃学校給食。当日はプロジェクトの発表とともに、かもめ会議参加者と意見交換ができればと考えております。",
        sold_out: None,
        speakers: &[
            speaker(
                "榎 裕子氏 (GMBA2022期)",
                "ヨコハマ未来創造会議 メンバー",
                "",
                image!("%E3%83%A8%E3%82%B3%E3%83%8F%E3%83%9E%E6%9C%AA%E6%9D%A5%E4%BC%9A%E8%AD%B0_%E6%A6%8E%E3%81%95%E3%82%93-mQAcpSPen6tOaEiRAL8wIkWkiqZNVV.png"),
            ),
            speaker(
                "馬場 英鷹氏 (GMBA2021期)",
                "ヨコハマ未来創造会議 メンバー",
                "",
                image!("%E3%83%A8%E3%82%B3%E3%83%8F%E3%83%9E%E6%9C%AA%E6%9D%A5%E4%BC%9A%E8%AD%B0_%E9%A6%AC%E5%A0%B4%E3%81%95%E3%82%93-r56OjWtqO39IasrnkP0tTuxQuMUjQ0.png"),
            ),
        ],
    },
];

const BREAKOUT_2: &[Session] = &[
    Session {
        event_label: "分科会C",
        title: "地方創生\n～鎌倉から地方創生を生み出す地域企業について～",
        description: "鎌倉市に拠点を構え、神奈川県の地方創生だけではなく、全国の地域や企業と連携し、地域活性化、移住者の促進や関係人口創出に繋がるプロジェクトを手掛ける同社。今回ご登壇いただく宮本氏は、前職の編集者から同社に転職され、現在はちいき資本主義事業部の事業部長を担っておられます。同社がこれまで手掛けたきたプロジェクトの紹介に加え、宮本氏がどのような想いを持ち、全国の地域創生を進めているのかについてもお話いただきます。",
        sold_out: Some(true),
        speakers: &[speaker(
            "宮本 早織氏",
            "面白法人カヤック",
            "ちいき資本主義事業部 事業部長",
            image!("%E5%9C%B0%E6%96%B9%E5%89%B5%E7%94%9F%E5%AE%AE%E6%9C%AC%E3%81%95%E3%82%93-YCLUEY7KLQFkc18vnuTqBKCNhcBOtg.png"),
        )],
    },
    Session {
        event_label: "分科会D",
        title: "ヘルスケア最前線！未病対策！！\n～先進的な未病産業創出を推進する神奈川県～",
        description: "神奈川県では、次世代社会システ厶「神奈川Me-BYOリビングラボ」の構築を進め、未病対策を推進しています。産官学連携で新たな価値や未病産業を創出し、持続可能な健康長寿社会の実現を目指しています。\nまた、神奈川県は全国に先駆けて神奈川発の未病産業の市場拡大を図るため、「ME-BYOサミット神奈川」を開催し、未病コンセプトやその改善の重要性を普及・啓発する活動を展開しており、未病における最新の取り組みについてもご紹介します。",
        sold_out: None,
        speakers: &[speaker(
            "成田 悠亜氏",
            "神奈川県政策局",
            "いのち・未来戦略本部 未病連携グループ 主任主事",
            image!("%E6%9C%AA%E7%97%85%E5%AF%BE%E7%AD%96_%E6%88%90%E7%94%B0%E3%81%95%E3%82%93-ruFLmpULgm3pId3M0auwkLW2qFjZqe.png"),
        )],
    },
];

const BREAKOUT_3: &[Session] = &[
    Session {
        event_label: "分科会E",
        title: "宇宙ビジネスの最前線へ\n～地上のスキルが宇宙を拓く～",
        description: "昨今注目を集める「宇宙ビジネス」、具体的にどのようなことが行われていて、どんな可能性があるのか気になる方も多いのではないでしょうか？ここ横浜・神奈川でもJAXAをはじめとするさまざまなプレイヤーが活躍しています。\n実はキャリアにおいても、高度専門領域というイメージに反して、地上産業の知見やスキルが宇宙産業で大いに求められています。\n今回は、大企業から宇宙ベンチャーに飛び込んだデザイナーが、ユニークなキャリア体験談も交えながら、その魅力についてお話しします。",
        sold_out: None,
        speakers: &[speaker(
            "山下 コウセイ氏",
            "DigitalBlast",
            "宇宙デザイナー",
            image!("%E5%AE%87%E5%AE%99%E3%83%93%E3%82%B8%E3%83%8D%E3%82%B9_Kosei%20Yamashita-ZLo4TZ4H9hy7CUEuWEcJqzvkrKLfeV.png"),
        )],
    },
    Session {
        event_label: "分科会F",
        title: "サーキュラーエコノミー\n～リーダー達の社会課題への取り組み方～",
        description: "サーキュラーエコノミーで業界をリードする2名の代表者が、食品廃棄物を利用したリサイクル事業や、容器リユースシェアリングサービス「Megloo」について話します。各社の起業から運営までの実務経験を基に、起業のノウハウや業界の未来について伺います。社会課題に関心を持つ方にとって、次の一歩を踏み出すためのヒントに満ちた１時間です。",
        sold_out: Some(true),
        speakers: &[
            speaker(
                "髙橋 巧一氏",
                "株式会社日本フードエコロジーセンター",
                "代表取締役",
                image!("%E3%82%B5%E3%83%BC%E3%82%AD%E3%83%A5%E3%83%A9%E3%83%BC%E3%82%A8%E3%82%B3%E3%83%8E%E3%83%9F%E3%83%BC%E9%AB%98%E6%A9%8B%E3%81%95%E3%82%93-rwY54wj8wXhIFEmeT5nSbu4eVerNd1.png"),
            ),
            speaker(
                "善積 真吾氏",
                "株式会社カマン",
                "代表取締役",
                image!("%E3%82%B5%E3%83%BC%E3%82%AD%E3%83%A5%E3%83%A9%E3%83%BC%E3%82%A8%E3%82%B3%E3%83%8E%E3%83%9F%E3%83%BC%E5%96%84%E7%A9%8D%E3%81%95%E3%82%93-UVwhXRCkrSGUrQ6Gc1JMw9DCWQoVTp.png"),
            ),
        ],
    },
];

/// The full agenda, in on-page order.
pub static SCHEDULE: &[ScheduleEntry] = &[
    ScheduleEntry::simple("9:30", "10:00", "受付開始"),
    ScheduleEntry::simple("10:00", "10:15", "オープニング"),
    ScheduleEntry {
        start_time: "10:15",
        end_time: "11:30",
        event_label: "全体会",
        kind: EntryKind::Plenary,
        duration_label: Some("(75min.)"),
        sessions: PLENARY,
    },
    ScheduleEntry::simple("11:30", "13:00", "ランチブレイク /\nネットワーキング"),
    ScheduleEntry {
        start_time: "13:00",
        end_time: "14:00",
        event_label: "分科会1",
        kind: EntryKind::Breakout,
        duration_label: Some("(60min.)"),
        sessions: BREAKOUT_1,
    },
    ScheduleEntry::simple("14:00", "14:15", "休憩"),
    ScheduleEntry {
        start_time: "14:15",
        end_time: "15:15",
        event_label: "分科会2",
        kind: EntryKind::Breakout,
        duration_label: Some("(60min.)"),
        sessions: BREAKOUT_2,
    },
    ScheduleEntry::simple("15:15", "15:30", "休憩"),
    ScheduleEntry {
        start_time: "15:30",
        end_time: "16:30",
        event_label: "分科会3",
        kind: EntryKind::Breakout,
        duration_label: Some("(60min.)"),
        sessions: BREAKOUT_3,
    },
    ScheduleEntry::simple("16:30", "16:45", "休憩"),
    ScheduleEntry::simple("16:45", "17:15", "クロージング /\nディスカッション"),
];
