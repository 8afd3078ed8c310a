use serde::Serialize;

use super::geo::LatLng;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Neighborhood {
    pub name: &'static str,
    pub borough: &'static str,
    pub position: LatLng,
}

impl Neighborhood {
    const fn new(name: &'static str, borough: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            borough,
            position: LatLng::new(lat, lng),
        }
    }
}

const LONDON_NEIGHBORHOODS: &[Neighborhood] = &[
    Neighborhood::new("Camden Town", "Camden", 51.5390, -0.1426),
    Neighborhood::new("Hampstead", "Camden", 51.5560, -0.1780),
    Neighborhood::new("Shoreditch", "Hackney", 51.5255, -0.0790),
    Neighborhood::new("Islington", "Islington", 51.5322, -0.1058),
    Neighborhood::new("Soho", "Westminster", 51.5136, -0.1365),
    Neighborhood::new("Notting Hill", "Kensington and Chelsea", 51.5090, -0.1960),
    Neighborhood::new("Chelsea", "Kensington and Chelsea", 51.4875, -0.1687),
    Neighborhood::new("Brixton", "Lambeth", 51.4613, -0.1156),
    Neighborhood::new("Clapham", "Lambeth", 51.4620, -0.1380),
    Neighborhood::new("Peckham", "Southwark", 51.4740, -0.0690),
    Neighborhood::new("Greenwich", "Greenwich", 51.4826, -0.0077),
    Neighborhood::new("Canary Wharf", "Tower Hamlets", 51.5054, -0.0235),
];

/// Neighborhood markers shown on the default London map.
pub fn london_neighborhoods() -> &'static [Neighborhood] {
    LONDON_NEIGHBORHOODS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_not_empty() {
        assert!(!london_neighborhoods().is_empty());
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = london_neighborhoods().iter().map(|n| n.name).collect();
        assert_eq!(names.len(), london_neighborhoods().len());
    }

    #[test]
    fn test_every_neighborhood_is_inside_greater_london() {
        for neighborhood in london_neighborhoods() {
            let LatLng { lat, lng } = neighborhood.position;
            assert!(
                (51.28..=51.70).contains(&lat) && (-0.52..=0.34).contains(&lng),
                "{} at ({lat}, {lng}) is outside Greater London",
                neighborhood.name
            );
        }
    }
}
