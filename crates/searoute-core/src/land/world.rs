//! Built-in coastline, lane and corridor tables.
//!
//! Coastlines are coarse rings traced along the shore; each ring closes back
//! to its first vertex across the landward side.

use super::{BoundingBox, Corridor, LandModel, Landmass, MarginRegion, ShippingLane};
use crate::models::Coordinate;

const UAE_OMAN: &[(f64, f64)] = &[
    (51.35, 24.45), // Abu Dhabi west
    (51.58, 24.47),
    (51.95, 24.48),
    (52.60, 24.45),
    (53.20, 24.42),
    (53.85, 24.40),
    (54.15, 24.42),
    (54.28, 24.45),
    (54.32, 24.47),
    (54.38, 24.48),
    (54.45, 24.49),
    (54.52, 24.51),
    (54.65, 24.55),
    (54.72, 24.58),
    (54.85, 24.65),
    (55.05, 24.75),
    (55.15, 24.85),
    (55.35, 24.95),
    (55.55, 25.15), // Ras Al Khaimah
    (55.75, 25.35),
    (55.95, 25.55),
    (56.15, 25.75),
    (56.35, 25.95),
    (56.45, 26.15),
    (56.52, 26.25), // Musandam tip
    (56.65, 26.15),
    (56.85, 25.95),
    (57.05, 25.75),
    (57.25, 25.45),
    (57.45, 25.15),
    (57.65, 24.85),
    (57.85, 24.55),
    (58.05, 24.25),
    (58.25, 23.95),
    (58.45, 23.65),
    (58.65, 23.35), // Oman south
];

const INDIAN_SUBCONTINENT: &[(f64, f64)] = &[
    (72.8, 19.2), // Mumbai
    (72.5, 19.0),
    (72.8, 18.9),
    (73.0, 18.0),
    (73.5, 17.0),
    (74.0, 16.0),
    (74.5, 15.0),
    (75.0, 14.0),
    (75.5, 13.0),
    (76.0, 12.0),
    (76.5, 11.0),
    (77.0, 10.0),
    (77.5, 9.0),
    (78.0, 8.5),
    (79.0, 8.0),
    (79.5, 7.5),
    (80.0, 7.0),
    (80.5, 6.5),
    (81.0, 7.0),
    (81.5, 8.0),
    (82.0, 9.0),
    (82.5, 10.0),
    (83.0, 11.0),
    (83.5, 12.0),
    (84.0, 13.0),
    (84.5, 14.0),
    (85.0, 15.0),
    (85.5, 16.0),
    (86.0, 17.0),
    (86.5, 18.0),
    (87.0, 19.0),
    (88.0, 20.0),
    (89.0, 21.0),
    (90.0, 22.0),
    (91.0, 22.0), // Bangladesh
];

const SRI_LANKA: &[(f64, f64)] = &[
    (79.87, 9.82),
    (80.12, 9.67),
    (80.52, 9.42),
    (80.87, 9.27),
    (81.22, 9.12),
    (81.62, 8.92),
    (81.87, 8.42),
    (81.72, 7.92),
    (81.52, 7.42),
    (81.22, 6.92),
    (80.92, 6.42),
    (80.52, 6.12),
    (80.12, 5.92),
    (79.92, 6.12),
    (79.72, 6.42),
    (79.52, 6.92),
    (79.42, 7.42),
    (79.32, 7.92),
    (79.42, 8.42),
    (79.52, 8.92),
    (79.72, 9.42),
];

const JAPAN: &[(f64, f64)] = &[
    (129.33, 33.23), // Fukuoka
    (129.87, 32.75),
    (130.20, 32.24),
    (130.40, 31.90),
    (131.12, 31.58),
    (131.47, 31.80),
    (132.55, 32.45),
    (133.53, 33.55),
    (134.69, 34.07),
    (135.43, 34.65), // Osaka
    (136.90, 34.90),
    (137.72, 34.70),
    (138.64, 35.10),
    (139.77, 35.45), // Tokyo
    (140.87, 36.10),
    (140.97, 36.95),
    (141.15, 38.26),
    (141.35, 39.58),
    (141.47, 40.83),
    (140.72, 41.77),
    (141.35, 42.65),
    (142.95, 43.82),
    (144.37, 43.38),
    (145.52, 43.15),
];

const KOREA: &[(f64, f64)] = &[
    (126.45, 37.50), // Incheon
    (126.37, 36.90),
    (126.52, 36.32),
    (126.48, 35.95),
    (127.35, 34.85),
    (127.75, 34.72),
    (128.15, 34.95),
    (128.60, 35.10),
    (129.05, 35.15),
    (129.45, 35.50), // Busan
    (129.57, 35.95),
    (129.45, 36.63),
    (129.37, 37.25),
    (129.12, 37.65),
    (128.85, 38.30),
];

const CHINA_EAST: &[(f64, f64)] = &[
    (117.72, 38.97), // Tianjin
    (118.12, 38.72),
    (118.97, 37.85),
    (119.52, 37.12),
    (120.32, 36.27), // Qingdao
    (121.45, 35.42),
    (121.85, 34.75),
    (121.97, 33.92),
    (121.82, 32.85),
    (121.52, 31.67), // Shanghai
    (120.15, 30.27),
    (119.65, 29.12),
    (119.02, 27.35),
    (118.77, 26.15),
    (118.15, 24.82), // Xiamen
];

const TAIWAN: &[(f64, f64)] = &[
    (121.45, 25.18),
    (121.92, 25.05),
    (121.87, 24.72),
    (121.62, 24.02),
    (121.37, 23.10),
    (120.85, 22.02),
    (120.25, 22.57),
    (120.20, 23.05),
    (120.32, 23.75),
    (120.52, 24.42),
    (121.00, 25.00),
];

const PHILIPPINES: &[(f64, f64)] = &[
    (120.23, 18.22), // Luzon north
    (121.65, 18.47),
    (122.12, 16.92),
    (123.97, 13.67),
    (124.27, 12.32),
    (125.52, 11.27),
    (125.37, 10.12),
    (124.97, 9.77),
    (123.92, 9.57),
    (123.15, 9.42), // Cebu
    (122.52, 9.83),
    (121.97, 10.82),
    (120.92, 11.37),
    (120.47, 11.92),
    (119.77, 12.77),
];

const VIETNAM: &[(f64, f64)] = &[
    (108.82, 19.27),
    (109.12, 18.72),
    (109.40, 17.97),
    (108.92, 16.62),
    (108.37, 15.92),
    (108.20, 14.52),
    (109.12, 13.37),
    (109.27, 12.25),
    (109.42, 11.45),
    (108.87, 10.72),
    (107.02, 10.37),
    (106.62, 10.22),
    (106.22, 9.95),
    (105.72, 9.77),
    (104.82, 9.52),
];

const THAILAND_GULF: &[(f64, f64)] = &[
    (100.42, 13.72), // Bangkok
    (100.92, 13.32),
    (101.27, 12.92),
    (101.87, 12.67),
    (102.52, 12.47),
    (102.92, 12.17),
    (102.37, 11.77),
    (101.82, 10.97),
    (100.92, 9.82),
    (100.22, 8.92),
];

const MALAY_PENINSULA: &[(f64, f64)] = &[
    (103.85, 1.42), // Singapore
    (103.62, 1.27),
    (103.42, 1.17),
    (102.87, 1.47),
    (102.42, 1.97),
    (101.97, 2.42),
    (101.42, 2.92),
    (100.92, 3.42),
    (100.42, 3.92),
    (100.12, 4.42),
    (99.87, 4.92),
    (99.62, 5.42),
    (99.42, 5.92),
];

const SUMATRA: &[(f64, f64)] = &[
    (95.32, 5.57),
    (96.12, 5.27),
    (97.42, 4.92),
    (98.72, 4.27),
    (100.12, 3.72),
    (101.42, 2.92),
    (102.72, 2.27),
    (103.92, 1.62),
    (104.42, 1.12),
    (105.92, 0.42),
];

const LANE_MUMBAI_SINGAPORE: &[(f64, f64)] = &[
    (72.8, 18.9),
    (72.5, 17.0),
    (73.0, 15.0),
    (73.5, 13.0),
    (74.0, 12.0),
    (75.0, 11.0),
    (76.0, 10.0),
    (77.0, 9.0),
    (78.0, 8.0),
    (79.0, 7.5),
    (80.0, 7.0),
    (81.0, 6.5),
    (82.0, 6.0),
    (83.0, 6.0),
    (84.0, 6.0),
    (85.0, 6.0),
    (86.0, 6.0),
    (87.0, 6.0),
    (88.0, 6.0),
    (89.0, 6.0),
    (90.0, 6.0),
    (91.0, 6.0),
    (92.0, 6.0),
    (93.0, 6.0),
    (94.0, 6.0),
    (95.0, 5.0),
    (96.0, 4.0),
    (97.0, 3.0),
    (98.0, 2.0),
    (99.0, 1.5),
    (100.0, 1.3),
    (101.0, 1.2),
    (102.0, 1.2),
    (103.0, 1.3),
    (103.8, 1.3),
];

const LANE_DEEP_SOUTHERN: &[(f64, f64)] = &[
    (72.8, 18.9),
    (73.0, 16.0),
    (74.0, 14.0),
    (75.0, 12.0),
    (76.0, 10.0),
    (77.0, 8.0),
    (78.0, 7.0),
    (79.0, 6.0),
    (80.0, 5.0),
    (81.0, 4.0),
    (82.0, 4.0),
    (83.0, 4.0),
    (84.0, 4.0),
    (85.0, 4.0),
    (90.0, 4.0),
    (95.0, 3.0),
    (100.0, 2.0),
    (103.8, 1.3),
];

fn coords(points: &[(f64, f64)]) -> Vec<Coordinate> {
    points.iter().copied().map(Coordinate::from).collect()
}

fn landmass(name: &str, points: &[(f64, f64)]) -> Landmass {
    Landmass::new(name, coords(points))
}

pub(super) fn build() -> LandModel {
    let landmasses = vec![
        landmass("UAE & Oman", UAE_OMAN),
        landmass("Indian subcontinent", INDIAN_SUBCONTINENT),
        landmass("Sri Lanka", SRI_LANKA),
        landmass("Japan", JAPAN),
        landmass("South Korea", KOREA),
        landmass("China east coast", CHINA_EAST),
        landmass("Taiwan", TAIWAN),
        landmass("Philippines", PHILIPPINES),
        landmass("Vietnam", VIETNAM),
        landmass("Gulf of Thailand", THAILAND_GULF),
        landmass("Malay peninsula", MALAY_PENINSULA),
        landmass("Sumatra", SUMATRA),
    ];

    LandModel::new(landmasses)
        .with_lanes(
            vec![
                ShippingLane::new("Mumbai - Singapore", coords(LANE_MUMBAI_SINGAPORE)),
                ShippingLane::new("Deep southern passage", coords(LANE_DEEP_SOUTHERN)),
            ],
            vec![BoundingBox::new(70.0, 105.0, -2.0, 20.0)],
        )
        .with_margin_region(MarginRegion::new(
            "Persian Gulf",
            BoundingBox::new(51.0, 57.0, 23.5, 26.5),
            0.4,
        ))
        .with_margin_region(MarginRegion::new(
            "Indian subcontinent",
            BoundingBox::new(65.0, 95.0, 0.0, 25.0),
            0.3,
        ))
        .with_corridor(Corridor::new(
            "Strait of Hormuz",
            BoundingBox::new(47.5, 56.0, 23.8, 30.5),
            vec![Coordinate::new(56.6, 26.9), Coordinate::new(58.5, 25.0)],
        ))
}
