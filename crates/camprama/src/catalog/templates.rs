//! Predefined packing lists.
//!
//! Templates are read-only. Users copy one into their own list with
//! [`PacklistStore::copy_from_template`](crate::packlist::PacklistStore::copy_from_template)
//! or tick items off through the
//! [`TemplateEditor`](crate::packlist::TemplateEditor).

use serde::Serialize;

/// One line of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateItem {
    /// Identifier, unique within its template.
    pub id: &'static str,
    /// Display label.
    pub text: &'static str,
}

/// An immutable, predefined packing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PacklistTemplate {
    /// Template identifier; becomes `sourceId` on imported lists.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Items in display order.
    pub items: &'static [TemplateItem],
}

impl PacklistTemplate {
    /// Number of items in the template.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the template has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text for a share sheet.
    #[must_use]
    pub fn share_message(&self) -> String {
        format!("{} — {} items", self.title, self.len())
    }
}

macro_rules! items {
    ($($id:literal => $text:literal),* $(,)?) => {
        &[$(TemplateItem { id: $id, text: $text }),*]
    };
}

/// All packing list templates.
pub const TEMPLATES: &[PacklistTemplate] = &[
    PacklistTemplate {
        id: "car-camping",
        title: "Weekend Car Camping",
        items: items![
            "cc-tent" => "Tent with footprint and stakes",
            "cc-sleeping-bag" => "Sleeping bag rated for night lows",
            "cc-pad" => "Sleeping pad",
            "cc-stove" => "Camp stove and fuel",
            "cc-cooler" => "Hard-sided cooler",
            "cc-cookset" => "Pot, pan and utensils",
            "cc-headlamp" => "Headlamp with spare batteries",
            "cc-rain" => "Rain shell",
            "cc-layers" => "Warm layers for the evening",
            "cc-firstaid" => "First-aid kit",
            "cc-water" => "Water jugs",
            "cc-reservation" => "Campsite reservation and park pass",
        ],
    },
    PacklistTemplate {
        id: "backcountry-hike",
        title: "Backcountry Hike",
        items: items![
            "bh-pack" => "Backpack with rain cover",
            "bh-shelter" => "Lightweight tent",
            "bh-bag" => "Sleeping bag and pad",
            "bh-filter" => "Water filter or purification tablets",
            "bh-stove" => "Backpacking stove and fuel canister",
            "bh-canister" => "Bear canister",
            "bh-spray" => "Bear spray",
            "bh-map" => "Topographic map and compass",
            "bh-communicator" => "Satellite communicator",
            "bh-firstaid" => "First-aid and repair kit",
            "bh-layers" => "Insulating layer and storm shell",
            "bh-headlamp" => "Headlamp",
        ],
    },
    PacklistTemplate {
        id: "canoe-trip",
        title: "Canoe Trip",
        items: items![
            "ct-pfd" => "PFD for every paddler",
            "ct-paddles" => "Paddles plus a spare",
            "ct-bailer" => "Bailer and throw rope",
            "ct-drybags" => "Dry bags",
            "ct-barrel" => "Food barrel or canister",
            "ct-map" => "Waterproof route map",
            "ct-filter" => "Water filter",
            "ct-tarp" => "Tarp and cord",
            "ct-sun" => "Sun hat and sunscreen",
            "ct-bugs" => "Bug net and repellent",
        ],
    },
    PacklistTemplate {
        id: "bear-country",
        title: "Bear Country Essentials",
        items: items![
            "bc-spray" => "Bear spray in a holster",
            "bc-bags" => "Odor-proof bags",
            "bc-container" => "Hard-sided food container",
            "bc-cord" => "Long cord for food hangs",
            "bc-horn" => "Whistle or air horn",
            "bc-headlamp" => "Headlamp with a strong beam",
        ],
    },
    PacklistTemplate {
        id: "coastal-camping",
        title: "Coastal Camping",
        items: items![
            "co-tides" => "Printed tide tables",
            "co-rain" => "Solid rain shell and pants",
            "co-tarp" => "Tarp for the kitchen",
            "co-shoes" => "Water shoes",
            "co-binoculars" => "Binoculars",
            "co-layers" => "Fleece for foggy mornings",
            "co-lockbox" => "Lockable food storage",
        ],
    },
];

/// Look up a template by id.
#[must_use]
pub fn find_template(id: &str) -> Option<&'static PacklistTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}
