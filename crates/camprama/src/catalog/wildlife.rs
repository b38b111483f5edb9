//! Wildlife safety profiles.

use serde::Serialize;

/// How careful to be around an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DangerLevel {
    /// Encounters are rare and brief.
    Awareness,
    /// Keep distance and know what to do.
    Caution,
    /// Potentially lethal; carry deterrents.
    ExtremeCaution,
}

impl std::fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Awareness => write!(f, "Awareness"),
            Self::Caution => write!(f, "Caution"),
            Self::ExtremeCaution => write!(f, "Extreme Caution"),
        }
    }
}

/// Safety profile for one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wildlife {
    /// Stable identifier.
    pub id: &'static str,
    /// Common name.
    pub name: &'static str,
    /// Scientific name.
    pub latin: &'static str,
    /// Danger level.
    pub level: DangerLevel,
    /// Where in Canada the species is found, when limited.
    pub region_note: Option<&'static str>,
    /// Typical habitat.
    pub habitat: &'static str,
    /// Tracks and other signs.
    pub signs: Option<&'static str>,
    /// Typical behavior around people.
    pub behavior: Option<&'static str>,
    /// Encounter steps, in order.
    pub what_to_do: &'static [&'static str],
    /// Food storage advice.
    pub food_security: &'static str,
    /// Gear worth adding to a packlist.
    pub add_to_packlist: &'static str,
}

/// Look up a profile by id.
#[must_use]
pub fn find_wildlife(id: &str) -> Option<&'static Wildlife> {
    WILDLIFE.iter().find(|w| w.id == id)
}

/// All wildlife profiles.
pub const WILDLIFE: &[Wildlife] = &[
    Wildlife {
        id: "black-bear",
        name: "Black Bear",
        latin: "Ursus americanus",
        level: DangerLevel::Caution,
        region_note: None,
        habitat: "Forests across BC, AB, SK, MB, ON, QC, NB, NS, PE, NL; edges of campgrounds, berry patches.",
        signs: Some("Tracks with five toes, claw marks on trees, scat with seeds/berries; curious but usually avoids people."),
        behavior: None,
        what_to_do: &[
            "Stay calm; do not run.",
            "Speak firmly; make yourself look larger; keep kids close.",
            "Back away slowly, giving an exit route.",
            "If it approaches: ready bear spray (effective range ~8–10 m).",
            "If contact seems imminent: use spray; leave area when safe.",
        ],
        food_security: "Use bear canisters/lockers; never leave food or scented items out; cook/eat 60 m from your tent in backcountry.",
        add_to_packlist: "Bear spray, odor-proof bags, hard-sided container (car), long cord for hangs, whistle/air horn.",
    },
    Wildlife {
        id: "grizzly",
        name: "Grizzly/Brown Bear",
        latin: "Ursus arctos",
        level: DangerLevel::ExtremeCaution,
        region_note: Some("Select ranges of BC, AB, YT, NT, NU."),
        habitat: "Alpine meadows, avalanche paths, river bars; common in the Rockies and North.",
        signs: Some("Large tracks with long claw marks, wide scat, deep digs in meadows."),
        behavior: None,
        what_to_do: &[
            "Stay calm; do not run or climb trees.",
            "Low, calm voice; avoid direct eye contact; back away slowly.",
            "If it charges and seems defensive (surprised, with cubs): stand ground; use spray late (when within range).",
            "If contact occurs in a defensive attack: lie face-down, hands over neck, legs spread; remain still until it leaves.",
            "If the bear appears predatory (stalking, persistent): fight back with spray, rocks, sticks—aim for the face.",
        ],
        food_security: "As above; cook well away from sleeping area; avoid fish odors on clothing.",
        add_to_packlist: "Bear spray (+ holster), satellite communicator (remote zones), first-aid.",
    },
    Wildlife {
        id: "moose",
        name: "Moose",
        latin: "Alces alces",
        level: DangerLevel::Caution,
        region_note: None,
        habitat: "Lakes, marsh edges, willow flats across much of Canada.",
        signs: Some("Large heart-shaped tracks; browse on willows/aquatic plants."),
        behavior: Some("Can seem calm but may charge if surprised, with calf, or during rut (fall)."),
        what_to_do: &[
            "Keep very wide distance; give moose the trail.",
            "If ears pin back or hair rises: you’re too close—retreat behind cover (trees, car).",
            "If it charges: run behind solid cover; moose are fast but tire quickly.",
        ],
        food_security: "Not a food-conditioned species issue, but keep camps tidy to avoid attracting bears/wolves.",
        add_to_packlist: "Headlamp (dusk visibility), trekking pole (brush), bright clothing for shoulder seasons.",
    },
    Wildlife {
        id: "elk",
        name: "Elk/Wapiti",
        latin: "Cervus canadensis",
        level: DangerLevel::Caution,
        region_note: None,
        habitat: "Foothills, park towns (Banff/Jasper), meadows and edges.",
        signs: Some("Bugling in fall, groups in meadows, hoof prints with two toes."),
        behavior: None,
        what_to_do: &[
            "Give a wide berth; never move between a bull and cows or a cow and calf.",
            "If a bull faces you, head up and antlers back—back away quickly behind cover.",
            "During calving, cows can charge—leave the area immediately.",
        ],
        food_security: "Standard clean-camp practices.",
        add_to_packlist: "Binoculars (view from afar), map of town wildlife zones.",
    },
    Wildlife {
        id: "wolf",
        name: "Grey Wolf",
        latin: "Canis lupus",
        level: DangerLevel::Caution,
        region_note: None,
        habitat: "Boreal forest, mountain valleys, tundra; often nocturnal near people.",
        signs: Some("Tracks (four toes, nails), chorus howls, scat with hair/bone."),
        behavior: Some("Avoids humans; close approaches are rare."),
        what_to_do: &[
            "Stand your ground; make yourself look larger; speak/shout.",
            "Back away facing the wolf; do not run.",
            "If it approaches within a few strides: throw rocks/sticks, use air horn or spray.",
        ],
        food_security: "Never leave food/scraps; pack out fish remains away from camp.",
        add_to_packlist: "Air horn/whistle, headlamp with strong beam.",
    },
    Wildlife {
        id: "cougar",
        name: "Cougar/Mountain Lion",
        latin: "Puma concolor",
        level: DangerLevel::ExtremeCaution,
        region_note: None,
        habitat: "Forested canyons, coastal ranges (BC), mountain foothills.",
        signs: Some("Tracks (large cat print—no nail marks), caches of prey under debris."),
        behavior: Some("Stealthy; may follow quietly."),
        what_to_do: &[
            "Maintain eye contact; make yourself big; gather group together.",
            "Speak loudly, throw stones/sticks; do not crouch or run.",
            "If it attacks: fight back with whatever you have; protect neck/face.",
        ],
        food_security: "Keep kids close at dawn/dusk; control pets.",
        add_to_packlist: "Bear spray (effective on cougars), bright headlamp.",
    },
    Wildlife {
        id: "lynx",
        name: "Canada Lynx",
        latin: "Lynx canadensis",
        level: DangerLevel::Awareness,
        region_note: None,
        habitat: "Boreal/subalpine forests in the North and mountain parks.",
        signs: Some("Big, round, fluffy paw prints; hare remains; quiet, solitary sightings."),
        behavior: Some("Shy; encounters are typically brief and at distance."),
        what_to_do: &[
            "Enjoy from afar; keep pets leashed; give it space to leave.",
        ],
        food_security: "Standard clean-camp.",
        add_to_packlist: "Camera, binoculars.",
    },];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_have_steps() {
        for animal in WILDLIFE {
            assert!(!animal.what_to_do.is_empty(), "{} has no steps", animal.id);
        }
    }

    #[test]
    fn test_find_wildlife() {
        let grizzly = find_wildlife("grizzly").unwrap();
        assert_eq!(grizzly.level, DangerLevel::ExtremeCaution);
        assert!(grizzly.region_note.is_some());
        assert!(find_wildlife("sasquatch").is_none());
    }

    #[test]
    fn test_danger_level_display() {
        assert_eq!(DangerLevel::ExtremeCaution.to_string(), "Extreme Caution");
        assert!(DangerLevel::Awareness < DangerLevel::ExtremeCaution);
    }
}
