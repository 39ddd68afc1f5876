/// Registered passenger cars by country, plus the regional aggregates the
/// source table carries alongside them.
pub const COUNTRY_CARS: &[(&str, u64)] = &[
    ("Austria", 5_633_525),
    ("Belgium", 6_820_078),
    ("Bulgaria", 3_385_940),
    ("Croatia", 1_940_098),
    ("Czechia", 6_931_618),
    ("Denmark", 3_147_315),
    ("Finland", 3_191_483),
    ("France", 45_421_468),
    ("Germany", 52_275_833),
    ("Greece", 6_491_063),
    ("Hungary", 4_515_769),
    ("Ireland", 2_672_032),
    ("Italy", 44_999_681),
    ("Netherlands", 10_248_388),
    ("Norway", 3_416_216),
    ("Poland", 29_237_555),
    ("Portugal", 6_591_000),
    ("Romania", 8_517_728),
    ("Slovakia", 2_799_302),
    ("Spain", 29_707_581),
    ("Sweden", 5_637_469),
    ("Switzerland", 5_215_771),
    ("United Kingdom", 42_403_988),
    ("Belarus", 3_724_000),
    ("Russia", 56_673_511),
    ("Serbia", 2_430_672),
    ("Turkey", 18_512_642),
    ("Ukraine", 8_450_000),
    ("America", 452_977_372),
    ("Nafta", 360_911_859),
    ("Canada", 26_788_244),
    ("Mexico", 45_086_615),
    ("United States of America", 289_037_000),
    ("Argentina", 14_025_113),
    ("Brazil", 45_721_945),
    ("Chile", 4_750_551),
    ("Colombia", 5_659_794),
    ("Ecuador", 2_678_251),
    ("Peru", 2_945_462),
    ("Venezuela", 4_234_553),
    ("Australia", 18_924_450),
    ("China", 318_034_467),
    ("India", 45_687_000),
    ("Indonesia", 21_114_412),
    ("Iran", 15_962_671),
    ("Iraq", 4_715_435),
    ("Israel", 3_540_528),
    ("Japan", 76_702_773),
    ("Kazakhstan", 4_282_820),
    ("Malaysia", 17_748_900),
    ("New Zealand", 4_398_977),
    ("Pakistan", 4_553_947),
    ("Philippines", 4_317_267),
    ("South Korea", 23_730_286),
    ("Syria", 9_809_540),
    ("Taiwan", 8_193_237),
    ("Thailand", 19_773_217),
    ("United Arab Emirates", 3_181_465),
    ("Vietnam", 4_785_415),
    ("Africa", 60_556_712),
    ("Algeria", 6_239_942),
    ("Egypt", 6_918_213),
    ("Libya", 3_259_826),
    ("Morocco", 4_120_233),
    ("Nigeria", 11_605_207),
    ("South Africa", 10_338_783),
];

/// Global sales share per brand, in percent.
pub const BRAND_SHARES: &[(&str, f64)] = &[
    ("Toyota", 12.5),
    ("Volkswagen", 11.2),
    ("Hyundai/Kia", 8.4),
    ("GM", 7.8),
    ("Ford", 6.1),
    ("Honda", 5.5),
    ("Nissan", 4.2),
    ("Stellantis", 7.0),
    ("BYD", 4.8),
    ("Tesla", 3.1),
    ("Geely", 3.6),
    ("Other", 26.0),
];
