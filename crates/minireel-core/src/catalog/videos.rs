//! Built-in catalog entries
//!
//! Media is served from Google's public sample bucket (Blender Foundation open
//! movies and other CC-licensed clips). Each clip has a matching still under
//! `images/`.

use super::{Category, VideoItem};

const SAMPLE_BASE: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

/// (id, title, file stem, duration, category, description)
const ENTRIES: &[(&str, &str, &str, u32, Category, &str)] = &[
    ("action-1", "Big Buck Bunny", "BigBuckBunny", 596, Category::Action,
        "A large rabbit deals with three bullying rodents."),
    ("action-2", "For Bigger Blazes", "ForBiggerBlazes", 15, Category::Action,
        "An action-packed introduction."),
    ("action-3", "For Bigger Escapes", "ForBiggerEscapes", 15, Category::Action,
        "High-octane escape sequences."),
    ("action-4", "Sintel", "Sintel", 888, Category::Action,
        "A girl searches for her pet dragon."),
    ("comedy-1", "For Bigger Fun", "ForBiggerFun", 60, Category::Comedy,
        "Fun moments compilation."),
    ("comedy-2", "For Bigger Joyrides", "ForBiggerJoyrides", 15, Category::Comedy,
        "Joyful adventures on the road."),
    ("comedy-3", "For Bigger Meltdowns", "ForBiggerMeltdowns", 15, Category::Comedy,
        "When things go hilariously wrong."),
    ("drama-1", "Elephant's Dream", "ElephantsDream", 653, Category::Drama,
        "Two people explore a strange mechanical world."),
    ("drama-2", "Tears of Steel", "TearsOfSteel", 734, Category::Drama,
        "A sci-fi short film about robots and humanity."),
    ("tech-1", "Volkswagen GTI Review", "VolkswagenGTIReview", 120, Category::Technology,
        "In-depth review of the Volkswagen GTI."),
    ("tech-2", "What Car Can You Get For A Grand", "WhatCarCanYouGetForAGrand", 180, Category::Technology,
        "Exploring budget car options."),
    ("sports-1", "Subaru Outback On Street And Dirt", "SubaruOutbackOnStreetAndDirt", 150, Category::Sports,
        "Testing the Subaru Outback on various terrains."),
    ("sports-2", "We Are Going On Bullrun", "WeAreGoingOnBullrun", 90, Category::Sports,
        "An epic automotive adventure."),
];

pub(super) fn builtin_videos() -> Vec<VideoItem> {
    ENTRIES
        .iter()
        .map(|&(id, title, stem, duration, category, description)| VideoItem {
            id: id.to_string(),
            title: title.to_string(),
            thumbnail: format!("{}/images/{}.jpg", SAMPLE_BASE, stem),
            duration,
            category,
            video_url: format!("{}/{}.mp4", SAMPLE_BASE, stem),
            description: Some(description.to_string()),
        })
        .collect()
}
