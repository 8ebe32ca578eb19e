//! Static partner configuration: one immutable display profile per partner type.

use std::fmt;

use serde::Serialize;

/// Audience segment the microsite copy is tailored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerType {
    Influencer,
    Hotel,
    Venue,
    Conference,
    Blog,
    Nightlife,
}

impl PartnerType {
    pub const ALL: [PartnerType; 6] = [
        PartnerType::Influencer,
        PartnerType::Hotel,
        PartnerType::Venue,
        PartnerType::Conference,
        PartnerType::Blog,
        PartnerType::Nightlife,
    ];

    /// Used whenever a key is missing or unrecognised and the deployment is permissive.
    pub const DEFAULT: PartnerType = PartnerType::Influencer;

    pub fn as_str(self) -> &'static str {
        match self {
            PartnerType::Influencer => "influencer",
            PartnerType::Hotel => "hotel",
            PartnerType::Venue => "venue",
            PartnerType::Conference => "conference",
            PartnerType::Blog => "blog",
            PartnerType::Nightlife => "nightlife",
        }
    }

    /// Case-insensitive lookup of a query/meta value. Surrounding whitespace is ignored.
    pub fn from_key(key: &str) -> Option<PartnerType> {
        let key = key.trim().to_lowercase();
        PartnerType::ALL.into_iter().find(|t| t.as_str() == key)
    }

    pub fn profile(self) -> &'static PartnerProfile {
        match self {
            PartnerType::Influencer => &INFLUENCER,
            PartnerType::Hotel => &HOTEL,
            PartnerType::Venue => &VENUE,
            PartnerType::Conference => &CONFERENCE,
            PartnerType::Blog => &BLOG,
            PartnerType::Nightlife => &NIGHTLIFE,
        }
    }
}

impl fmt::Display for PartnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FormLabels {
    pub name: &'static str,
    pub organization: &'static str,
    pub phone: &'static str,
    pub experience_placeholder: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct PartnerProfile {
    pub headline: &'static str,
    pub subtext: &'static str,
    pub steps: &'static [Step],
    pub example: &'static str,
    pub benefits: &'static [&'static str],
    pub form_labels: FormLabels,
    pub hero_image: &'static str,
    pub thank_you_image: &'static str,
    pub cta_background: &'static str,
    pub secondary_headline: &'static str,
    pub secondary_subtext: &'static str,
    pub title: Option<&'static str>,
    pub problem_heading: Option<&'static str>,
    pub problem_content: Option<&'static str>,
    pub solution_heading: Option<&'static str>,
    pub solution_content: Option<&'static str>,
    pub collage: Option<&'static [&'static str]>,
    pub solution_image: Option<&'static str>,
    pub problem_background_image: Option<&'static str>,
}

/// Profile for `key`, or the default profile when the key is unknown.
pub fn lookup(key: &str) -> &'static PartnerProfile {
    PartnerType::from_key(key)
        .unwrap_or(PartnerType::DEFAULT)
        .profile()
}

static INFLUENCER: PartnerProfile = PartnerProfile {
    headline: "Turn Your Posts Into Extra Income",
    subtext: "Your followers already love your recommendations. With Traaple, they can book them – while you earn each time.",
    steps: &[
        Step {
            title: "Share",
            description: "Share your favourite spots and experiences with your followers.",
        },
        Step {
            title: "Followers Book",
            description: "They book directly through your unique link.",
        },
        Step {
            title: "Earn",
            description: "You earn commissions on every booking – no extra effort.",
        },
    ],
    example: "10 followers book a ₵1,000 brunch = You earn ₵500 in commission.",
    benefits: &[
        "Post what you love and earn — no extra effort.",
        "Reach an engaged audience who trusts your recommendations.",
        "Access real‑time dashboards to track referrals and earnings.",
        "Dedicated support to help you maximise your income.",
    ],
    form_labels: FormLabels {
        name: "Name",
        organization: "Handle",
        phone: "Phone Number",
        experience_placeholder: "e.g. Food, Activities, Nightlife",
    },
    hero_image: "assets/influencer_hero.jpg",
    thank_you_image: "assets/influencer_hero.jpg",
    cta_background: "assets/forest.png",
    secondary_headline: "Ready to earn extra income?",
    secondary_subtext: "Join Traaple and start turning your posts into profits.",
    title: Some("Traaple for Creators | Earn From Every Recommendation"),
    problem_heading: Some("Your recommendations make money for everyone but you"),
    problem_content: Some("Followers ask where you ate, stayed and partied. They go, they book, and the platforms keep the commission."),
    solution_heading: Some("Get paid when your followers book"),
    solution_content: Some("Traaple turns every post into a bookable link. Your audience books the experience you shared and you earn on every booking."),
    collage: Some(&[
        "assets/collage_brunch.jpg",
        "assets/collage_beach.jpg",
        "assets/collage_nightlife.jpg",
    ]),
    solution_image: Some("assets/influencer_solution.jpg"),
    problem_background_image: Some("assets/influencer_problem.jpg"),
};

static HOTEL: PartnerProfile = PartnerProfile {
    headline: "Earn More From Every Guest",
    subtext: "Place a QR code in your rooms. Guests book tours – you earn commissions.",
    steps: &[
        Step {
            title: "Place QR Codes",
            description: "Place QR codes in your hotel rooms and lobbies.",
        },
        Step {
            title: "Guests Book",
            description: "Guests scan, discover curated experiences and book instantly.",
        },
        Step {
            title: "You Earn",
            description: "You earn a commission automatically on every booking.",
        },
    ],
    example: "For every guest who books a ₵2,000 tour, you get an extra ₵100.",
    benefits: &[
        "New labour‑free revenue stream.",
        "Enhance guests’ stays with curated local activities.",
        "Earn commission on every booking with zero overhead.",
        "We manage bookings, payments and support for you.",
    ],
    form_labels: FormLabels {
        name: "Name",
        organization: "Hotel Name",
        phone: "Phone Number",
        experience_placeholder: "e.g. Tours, Activities, Nightlife",
    },
    hero_image: "assets/hotel_hero.jpg",
    thank_you_image: "assets/hotel_hero.jpg",
    cta_background: "assets/forest.png",
    secondary_headline: "Ready to boost guest revenue?",
    secondary_subtext: "Partner with Traaple and monetise every stay.",
    title: Some("Traaple for Hotels | Earn From Every Guest"),
    problem_heading: Some("Guests leave the hotel to plan their days"),
    problem_content: Some("They ask reception for tips, then book tours elsewhere. The revenue walks out of your lobby."),
    solution_heading: Some("Curated experiences, booked from the room"),
    solution_content: Some("A QR code in every room gives guests vetted local experiences. They book in seconds and you earn a commission on each one."),
    collage: Some(&[
        "assets/collage_pool.jpg",
        "assets/collage_tour.jpg",
        "assets/collage_dinner.jpg",
    ]),
    solution_image: Some("assets/hotel_solution.jpg"),
    problem_background_image: None,
};

static VENUE: PartnerProfile = PartnerProfile {
    headline: "Unlock New Revenue from Your Venue",
    subtext: "Let guests discover and book dining or event experiences at your location.",
    steps: &[
        Step {
            title: "Display Codes",
            description: "Place QR codes or promotional screens throughout your venue.",
        },
        Step {
            title: "Guests Book",
            description: "Customers book curated experiences through your unique link.",
        },
        Step {
            title: "Earn",
            description: "You earn commission on every booking with zero overhead.",
        },
    ],
    example: "Guests spend ₵1,500 on a dinner package — you earn ₵300 in commission.",
    benefits: &[
        "Fill empty tables and time slots with high‑value bookings.",
        "Attract new customers through Traaple’s discovery platform.",
        "Access analytics to track bookings and revenue.",
        "We handle marketing, payments and support for you.",
    ],
    form_labels: FormLabels {
        name: "Name",
        organization: "Venue Name",
        phone: "Phone Number",
        experience_placeholder: "e.g. Dinners, Events, Parties",
    },
    hero_image: "assets/venue_hero.jpg",
    thank_you_image: "assets/venue_hero.jpg",
    cta_background: "assets/forest.png",
    secondary_headline: "Ready to fill seats and earn more?",
    secondary_subtext: "Partner with Traaple to monetise your venue.",
    title: None,
    problem_heading: None,
    problem_content: None,
    solution_heading: None,
    solution_content: None,
    collage: None,
    solution_image: None,
    problem_background_image: None,
};

static CONFERENCE: PartnerProfile = PartnerProfile {
    headline: "Monetise Your Conference Attendees",
    subtext: "Offer curated experiences to your attendees and earn commissions on every booking.",
    steps: &[
        Step {
            title: "Promote Experiences",
            description: "Share links or QR codes in your event materials and communications.",
        },
        Step {
            title: "Attendees Book",
            description: "Guests book tours, workshops and activities during or after the event.",
        },
        Step {
            title: "Earn",
            description: "You earn a commission on every booking automatically.",
        },
    ],
    example: "50 attendees book ₵3,000 activities — you earn ₵750 in commission.",
    benefits: &[
        "Enhance your event with unforgettable add‑on experiences.",
        "Increase revenue without raising ticket prices.",
        "Access dashboards to track bookings and attendee engagement.",
        "Support for logistics, payments and customer service.",
    ],
    form_labels: FormLabels {
        name: "Name",
        organization: "Conference / Event Name",
        phone: "Phone Number",
        experience_placeholder: "e.g. Tours, Workshops, Activities",
    },
    hero_image: "assets/conference_hero.jpg",
    thank_you_image: "assets/conference_hero.jpg",
    cta_background: "assets/forest.png",
    secondary_headline: "Ready to elevate your event?",
    secondary_subtext: "Partner with Traaple to offer curated experiences to attendees.",
    title: None,
    problem_heading: None,
    problem_content: None,
    solution_heading: None,
    solution_content: None,
    collage: None,
    solution_image: None,
    problem_background_image: None,
};

static BLOG: PartnerProfile = PartnerProfile {
    headline: "Turn Your Blog into a Revenue Stream",
    subtext: "Embed curated African experiences into your articles and earn when readers book.",
    steps: &[
        Step {
            title: "Create Content",
            description: "Write about your favourite places and embed your referral link.",
        },
        Step {
            title: "Readers Book",
            description: "They book experiences directly through your blog or media page.",
        },
        Step {
            title: "Earn",
            description: "You earn commission on every confirmed booking.",
        },
    ],
    example: "20 readers book a ₵2,000 adventure — you earn ₵400 in commission.",
    benefits: &[
        "Add value to your content with authentic travel recommendations.",
        "Engage your audience with bookable experiences.",
        "Track your earnings and bookings via dashboards.",
        "Dedicated support to optimise your monetisation strategy.",
    ],
    form_labels: FormLabels {
        name: "Name",
        organization: "Blog / Media Name",
        phone: "Phone Number",
        experience_placeholder: "e.g. Travel, Culture, Food",
    },
    // No dedicated blog hero yet
    hero_image: "assets/influencer_hero.jpg",
    thank_you_image: "assets/influencer_hero.jpg",
    cta_background: "assets/forest.png",
    secondary_headline: "Ready to monetise your content?",
    secondary_subtext: "Partner with Traaple and turn your stories into bookings.",
    title: None,
    problem_heading: None,
    problem_content: None,
    solution_heading: None,
    solution_content: None,
    collage: None,
    solution_image: None,
    problem_background_image: None,
};

static NIGHTLIFE: PartnerProfile = PartnerProfile {
    headline: "Earn More from Every Night Out",
    subtext: "Let patrons discover nightlife and entertainment experiences through your link and earn commissions.",
    steps: &[
        Step {
            title: "Promote Your Link",
            description: "Display your referral link or QR codes in your bar, lounge or club.",
        },
        Step {
            title: "Guests Book",
            description: "They book exclusive events and experiences nearby.",
        },
        Step {
            title: "Earn",
            description: "You earn a commission on every booking — no extra staff needed.",
        },
    ],
    example: "5 patrons book a ₵1,500 nightlife experience — you earn ₵150.",
    benefits: &[
        "Drive additional revenue from off‑peak hours.",
        "Offer guests curated nightlife experiences they’ll love.",
        "Real‑time dashboards to monitor your earnings.",
        "We handle bookings, payments and guest support.",
    ],
    form_labels: FormLabels {
        name: "Name",
        organization: "Venue Name",
        phone: "Phone Number",
        experience_placeholder: "e.g. Bars, Parties, Live Music",
    },
    // Reuses the venue hero
    hero_image: "assets/venue_hero.jpg",
    thank_you_image: "assets/venue_hero.jpg",
    cta_background: "assets/forest.png",
    secondary_headline: "Ready to turn nights into revenue?",
    secondary_subtext: "Partner with Traaple and monetise nightlife experiences.",
    title: None,
    problem_heading: None,
    problem_content: None,
    solution_heading: None,
    solution_content: None,
    collage: None,
    solution_image: None,
    problem_background_image: None,
};
