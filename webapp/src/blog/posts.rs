// the content store: every event post ever published, newest first.
// adding a post means appending a record here; nothing mutates at runtime.

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub content: &'static [&'static str],
    pub image: &'static str,
    pub mixcloud_url: Option<&'static str>,
    pub tracklist: Option<&'static [&'static str]>,
    pub upcoming: bool,
    pub slug: &'static str,
}

/// Exact-match lookup by slug.
pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Halloween Mocktail Mixer: Napa Valley Yoga Center",
        date: "October 26, 2024",
        location: "Napa Valley Yoga Center",
        content: &[
            "Join me for the Halloween Mocktail Mixer—a circus-themed night of music, mocktails, and creative costumes at the Napa Valley Yoga Center. No alcohol required, just good vibes and great energy.",
            "Whether you're sober-curious or just love a good theme party, this event is about connection, music, and creativity.",
        ],
        image: "/images/napa-yoga-center.jpg",
        mixcloud_url: None,
        tracklist: None,
        upcoming: true,
        slug: "halloween-mocktail-mixer-2024",
    },
    BlogPost {
        title: "No Love Lost Session: Full Set & House Mix",
        date: "September 25, 2024",
        location: "No Love Lost Winery, Napa",
        content: &[
            "This special session at No Love Lost Winery included two unique mixes, each capturing a distinct energy from the evening.",
            "The Full Set kicked off with a blend of soul, funk, R&B, and indie—featuring tracks by Jungle, The Isley Brothers, Talking Heads, and Frank Ocean. It was the perfect start to an engaging and laid-back evening.",
            "The House Mix picked up the tempo, highlighting rhythmic house and electronic tracks from artists like Fred again.., Dombresky, and Floramour. Perfect for late-night energy.",
        ],
        image: "/images/no-love-lost-winery-dj-napa.webp",
        mixcloud_url: Some(
            "https://player-widget.mixcloud.com/widget/iframe/?hide_cover=1&feed=%2FMMMilani%2Fno-love-lost-winery-full-set-9-25-2024%2F",
        ),
        tracklist: None,
        upcoming: false,
        slug: "no-love-lost-session-september-2024",
    },
    BlogPost {
        title: "International Yoga Day Vibes",
        date: "June 21, 2024",
        location: "Napa Valley Yoga Center",
        content: &[
            "I had the honor of performing a live set during the Napa Valley Yoga Center's International Yoga Day Open House. The event was a celebration of movement, mindfulness, and music—an immersive experience curated for both body and soul.",
            "The set featured a blend of Afro House, Latin grooves, and electronic soundscapes, designed to complement the energy of the yoga practice and spiritual intention.",
        ],
        image: "/images/napa-yoga-center-international-yoga-day-dj-2024.png",
        mixcloud_url: Some(
            "https://player-widget.mixcloud.com/widget/iframe/?hide_cover=1&feed=%2FMMMilani%2Finternational-yoga-day-set-6-21-24%2F",
        ),
        tracklist: Some(&[
            "CKay – Love Nwantiti Remix",
            "Navdeep – Chandigarh Breeze",
            "Childish Gambino – Feels Like Summer",
            "MALFNKTION – Samsara",
            "Koresma & Richard Houng – Trails",
            "Teno Afrika – Where Are You Now",
            "Angelo Ferreri & TSOS – Jingo",
            "Emmanuel Jal – Kuar (FNX Omar Edit)",
            "Banito – Sigua",
            "Kahani – Rampage",
            "Caso – Pienso En Ti",
        ]),
        upcoming: false,
        slug: "international-yoga-day-2024",
    },
    BlogPost {
        title: "Sunset Vibes at No Love Lost Winery",
        date: "May 25, 2024",
        location: "Downtown Napa, CA",
        content: &[
            "I performed a 2.5-hour set at No Love Lost Winery in the heart of downtown Napa. The parklet space on Clinton Street provided a perfect backdrop for a warm evening of music, wine, and good vibes.",
            "As the sun set and the sky turned golden, the crowd gathered to enjoy a carefully curated blend of house, disco, funk, and electronic tracks. It was the ideal soundtrack for a laid-back Napa night.",
        ],
        image: "/images/wine-girl-dj-bottlerock-2024.webp",
        mixcloud_url: Some(
            "https://player-widget.mixcloud.com/widget/iframe/?hide_cover=1&feed=%2FMMMilani%2Fno-love-lost-5-10-2024%2F",
        ),
        tracklist: Some(&[
            "Summer of Nights – Mak (feat. Tzar)",
            "Sete – BLOND, Francis Mercier, Amadou & Mariam",
            "Feel the Way I Do – The Jungle Giants (Remix)",
            "Roland Garros – Revers Gagnant (feat. Darlinn)",
            "Moody Blues – Saison",
            "Drop the Pressure – Claptone & Mylo (Sonny Fodera Remix)",
            "Ocean Drive – Duke Dumont (Purple Disco Machine Extended Mix)",
            "Moondance – Saxsquatch & Half an Orange",
            "Fireworks – Purple Disco Machine (feat. Moss Kena & The Knocks)",
        ]),
        upcoming: false,
        slug: "sunset-vibes-no-love-lost-may-2024",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<&str> = BLOG_POSTS.iter().map(|post| post.slug).collect();
        assert_eq!(slugs.len(), BLOG_POSTS.len());
    }

    #[test]
    fn every_stored_slug_resolves_to_its_own_post() {
        for post in BLOG_POSTS {
            let found = find_post(post.slug).unwrap();
            assert_eq!(found.title, post.title);
        }
    }

    #[test]
    fn unknown_slug_is_not_found() {
        assert!(find_post("does-not-exist").is_none());
        assert!(find_post("").is_none());
    }

    #[test]
    fn yoga_day_tracklist_kept_in_stored_order() {
        let post = find_post("international-yoga-day-2024").unwrap();
        let tracklist = post.tracklist.unwrap();
        assert_eq!(tracklist.len(), 11);
        assert_eq!(tracklist[0], "CKay – Love Nwantiti Remix");
        assert_eq!(tracklist[10], "Caso – Pienso En Ti");
    }
}
