// Static copy for the landing page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Clock,
    AlertTriangle,
    BookOpen,
}

impl FeatureIcon {
    pub fn class(&self) -> &'static str {
        match self {
            FeatureIcon::Clock => "fa-regular fa-clock",
            FeatureIcon::AlertTriangle => "fa-solid fa-triangle-exclamation",
            FeatureIcon::BookOpen => "fa-solid fa-book-open",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
}

impl Testimonial {
    /// Shown in place of a missing avatar picture.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub capacity: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Plain text documents offered as direct downloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalDocument {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const HEADLINE: &str = "遅刻なの事故なの？";
pub const SUBHEADLINE: &str = "kratは、生徒の安否確認ができるシンプルなアプリです。生徒の家からの出発時間を知ることで事故があっても即気づくことができ遅刻にも対応できます。";
pub const TAGLINE: &str = "生徒の安全を守る、次世代の安否確認サービス";
pub const CONTACT_PROMPT: &str =
    "ご検討いただける方は、以下のメールアドレスにてお話をうかがえればと思います。";

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { label: "機能", href: "#features" },
    NavLink { label: "ユーザーの声", href: "#testimonials" },
    NavLink { label: "料金プラン", href: "#pricing" },
];

pub static FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "ホーム", href: "#" },
    NavLink { label: "機能", href: "#features" },
    NavLink { label: "料金プラン", href: "#pricing" },
    NavLink { label: "お問い合わせ", href: "#contact" },
];

pub static LEGAL_DOCUMENTS: &[LegalDocument] = &[
    LegalDocument {
        label: "プライバシーポリシー",
        path: "/プライバシーポリシー.txt",
    },
    LegalDocument {
        label: "利用規約",
        path: "/利用規約.txt",
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "X",
        href: "https://x.com/SekiguchiS39523",
        icon: "fa-brands fa-x-twitter",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/sekiguchimend",
        icon: "fa-brands fa-github",
    },
];

pub static FEATURES: &[Feature] = &[
    Feature {
        title: "出発時間の共有",
        description: "生徒が家を出発する際に出発ボタンを押すことで先生の画面に生徒の出発時間が記録されます。",
        icon: FeatureIcon::Clock,
    },
    Feature {
        title: "当日の遅刻に対応",
        description: "想定以上に部活が伸びて15分くらいの遅刻の時にそれを生徒が先生に知らせることができます。",
        icon: FeatureIcon::AlertTriangle,
    },
    Feature {
        title: "先生画面の良さ",
        description: "先生画面では学年ごとに生徒が分かれて記録されているため非常にわかりやすく使うことができます。",
        icon: FeatureIcon::BookOpen,
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "山田さん",
        role: "私立学校 教頭",
        content: "自分の子供の安全が簡単に管理できるのでどの塾にも導入させるべきサービスです。",
    },
    Testimonial {
        name: "佐藤さん",
        role: "公立中学校 教諭",
        content: "親が今までは対応してたことが生徒自身でできるようになり塾側も親側もストレス無く使えています。",
    },
    Testimonial {
        name: "鈴木さん",
        role: "学習塾 経営者",
        content: "5分の遅れの時親に電話するのは野暮だし事故にあってたという不安もあるしで迷っていたことが解決しました。",
    },
];

pub static PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "ベーシックプラン",
        price: "¥50",
        capacity: "生徒一人50円",
        features: &["全機能利用可能", "カスタマーサポート対応", "月次レポート"],
    },
    PricingPlan {
        name: "スタンダードプラン",
        price: "¥60",
        capacity: "生徒一人60円で100人以上の塾の場合",
        features: &[
            "全機能利用可能",
            "カスタマーサポート対応",
            "月次レポート",
            "生徒数100人以上の塾はこのプラン",
        ],
    },
    PricingPlan {
        name: "プレミアムプラン",
        price: "¥80",
        capacity: "生徒一人60円で200人以上の塾の場合",
        features: &[
            "全機能利用可能",
            "カスタマーサポート対応",
            "月次レポート",
            "生徒数200人以上の塾はこのプラン",
        ],
    },
];
