//! Surah metadata in recitation order
//!
//! Canonical names follow the Indonesian transliteration used on report
//! forms; common English spellings are accepted as aliases.

use super::types::SurahInfo;

const fn surah(
    number: u16,
    name: &'static str,
    verses: u32,
    start_page: u32,
    aliases: &'static [&'static str],
) -> SurahInfo {
    SurahInfo {
        number,
        name,
        verses,
        start_page,
        aliases,
    }
}

/// All 114 surahs, indexed by `number - 1`
pub static SURAHS: [SurahInfo; 114] = [
    surah(1, "Al-Fatihah", 7, 1, &["Al-Fatiha"]),
    surah(2, "Al-Baqarah", 286, 2, &["Al-Baqara"]),
    surah(3, "Ali 'Imran", 200, 50, &["Al-Imran", "Ali Imron"]),
    surah(4, "An-Nisa'", 176, 77, &[]),
    surah(5, "Al-Ma'idah", 120, 106, &["Al-Ma'ida"]),
    surah(6, "Al-An'am", 165, 128, &[]),
    surah(7, "Al-A'raf", 206, 151, &[]),
    surah(8, "Al-Anfal", 75, 177, &[]),
    surah(9, "At-Taubah", 129, 187, &["At-Tawbah", "Al-Bara'ah"]),
    surah(10, "Yunus", 109, 208, &[]),
    surah(11, "Hud", 123, 221, &[]),
    surah(12, "Yusuf", 111, 235, &[]),
    surah(13, "Ar-Ra'd", 43, 249, &[]),
    surah(14, "Ibrahim", 52, 255, &[]),
    surah(15, "Al-Hijr", 99, 262, &[]),
    surah(16, "An-Nahl", 128, 267, &[]),
    surah(17, "Al-Isra'", 111, 282, &["Bani Isra'il"]),
    surah(18, "Al-Kahf", 110, 293, &[]),
    surah(19, "Maryam", 98, 305, &[]),
    surah(20, "Taha", 135, 312, &[]),
    surah(21, "Al-Anbiya'", 112, 322, &[]),
    surah(22, "Al-Hajj", 78, 332, &[]),
    surah(23, "Al-Mu'minun", 118, 342, &[]),
    surah(24, "An-Nur", 64, 350, &[]),
    surah(25, "Al-Furqan", 77, 359, &[]),
    surah(26, "Asy-Syu'ara'", 227, 367, &["Ash-Shu'ara"]),
    surah(27, "An-Naml", 93, 377, &[]),
    surah(28, "Al-Qasas", 88, 385, &[]),
    surah(29, "Al-'Ankabut", 69, 396, &[]),
    surah(30, "Ar-Rum", 60, 404, &[]),
    surah(31, "Luqman", 34, 411, &[]),
    surah(32, "As-Sajdah", 30, 415, &[]),
    surah(33, "Al-Ahzab", 73, 418, &[]),
    surah(34, "Saba'", 54, 428, &[]),
    surah(35, "Fatir", 45, 434, &["Al-Mala'ikah"]),
    surah(36, "Yasin", 83, 440, &[]),
    surah(37, "As-Saffat", 182, 446, &[]),
    surah(38, "Sad", 88, 453, &["Shad"]),
    surah(39, "Az-Zumar", 75, 458, &[]),
    surah(40, "Ghafir", 85, 467, &["Al-Mu'min"]),
    surah(41, "Fussilat", 54, 477, &["Ha Mim As-Sajdah"]),
    surah(42, "Asy-Syura", 53, 483, &["Ash-Shura"]),
    surah(43, "Az-Zukhruf", 89, 489, &[]),
    surah(44, "Ad-Dukhan", 59, 496, &[]),
    surah(45, "Al-Jatsiyah", 37, 499, &["Al-Jathiyah"]),
    surah(46, "Al-Ahqaf", 35, 502, &[]),
    surah(47, "Muhammad", 38, 507, &[]),
    surah(48, "Al-Fath", 29, 511, &[]),
    surah(49, "Al-Hujurat", 18, 515, &[]),
    surah(50, "Qaf", 45, 518, &[]),
    surah(51, "Adz-Dzariyat", 60, 520, &["Adh-Dhariyat"]),
    surah(52, "At-Tur", 49, 523, &[]),
    surah(53, "An-Najm", 62, 526, &[]),
    surah(54, "Al-Qamar", 55, 528, &[]),
    surah(55, "Ar-Rahman", 78, 531, &[]),
    surah(56, "Al-Waqi'ah", 96, 534, &[]),
    surah(57, "Al-Hadid", 29, 537, &[]),
    surah(58, "Al-Mujadilah", 22, 542, &[]),
    surah(59, "Al-Hasyr", 24, 545, &["Al-Hashr"]),
    surah(60, "Al-Mumtahanah", 13, 549, &[]),
    surah(61, "As-Saff", 14, 551, &[]),
    surah(62, "Al-Jumu'ah", 11, 553, &[]),
    surah(63, "Al-Munafiqun", 11, 554, &[]),
    surah(64, "At-Taghabun", 18, 556, &[]),
    surah(65, "At-Talaq", 12, 558, &[]),
    surah(66, "At-Tahrim", 12, 560, &[]),
    surah(67, "Al-Mulk", 30, 562, &[]),
    surah(68, "Al-Qalam", 52, 564, &["Nun"]),
    surah(69, "Al-Haqqah", 52, 566, &[]),
    surah(70, "Al-Ma'arij", 44, 568, &[]),
    surah(71, "Nuh", 28, 570, &[]),
    surah(72, "Al-Jinn", 28, 572, &[]),
    surah(73, "Al-Muzzammil", 20, 574, &[]),
    surah(74, "Al-Muddatstsir", 56, 575, &["Al-Muddaththir", "Al-Mudatsir"]),
    surah(75, "Al-Qiyamah", 40, 577, &[]),
    surah(76, "Al-Insan", 31, 578, &["Ad-Dahr"]),
    surah(77, "Al-Mursalat", 50, 580, &[]),
    surah(78, "An-Naba", 40, 582, &["'Amma"]),
    surah(79, "An-Nazi'at", 46, 583, &[]),
    surah(80, "'Abasa", 42, 585, &[]),
    surah(81, "At-Takwir", 29, 586, &[]),
    surah(82, "Al-Infitar", 19, 587, &[]),
    surah(83, "Al-Mutaffifin", 36, 587, &[]),
    surah(84, "Al-Insyiqaq", 25, 589, &["Al-Inshiqaq"]),
    surah(85, "Al-Buruj", 22, 590, &[]),
    surah(86, "At-Tariq", 17, 591, &[]),
    surah(87, "Al-A'la", 19, 591, &[]),
    surah(88, "Al-Ghasyiyah", 26, 592, &["Al-Ghashiyah"]),
    surah(89, "Al-Fajr", 30, 593, &[]),
    surah(90, "Al-Balad", 20, 594, &[]),
    surah(91, "Asy-Syams", 15, 595, &["Ash-Shams"]),
    surah(92, "Al-Lail", 21, 595, &["Al-Layl"]),
    surah(93, "Ad-Duha", 11, 596, &["Adh-Dhuha"]),
    surah(94, "Asy-Syarh", 8, 596, &["Ash-Sharh", "Al-Insyirah", "Alam Nasyrah"]),
    surah(95, "At-Tin", 8, 597, &[]),
    surah(96, "Al-'Alaq", 19, 597, &[]),
    surah(97, "Al-Qadr", 5, 598, &[]),
    surah(98, "Al-Bayyinah", 8, 598, &[]),
    surah(99, "Az-Zalzalah", 8, 599, &["Az-Zilzal"]),
    surah(100, "Al-'Adiyat", 11, 599, &[]),
    surah(101, "Al-Qari'ah", 11, 600, &[]),
    surah(102, "At-Takatsur", 8, 600, &["At-Takathur"]),
    surah(103, "Al-'Asr", 3, 601, &[]),
    surah(104, "Al-Humazah", 9, 601, &[]),
    surah(105, "Al-Fil", 5, 601, &[]),
    surah(106, "Quraisy", 4, 602, &["Quraysh"]),
    surah(107, "Al-Ma'un", 7, 602, &[]),
    surah(108, "Al-Kautsar", 3, 602, &["Al-Kawthar"]),
    surah(109, "Al-Kafirun", 6, 603, &[]),
    surah(110, "An-Nasr", 3, 603, &[]),
    surah(111, "Al-Lahab", 5, 603, &["Al-Masad"]),
    surah(112, "Al-Ikhlas", 4, 604, &[]),
    surah(113, "Al-Falaq", 5, 604, &[]),
    surah(114, "An-Nas", 6, 604, &[]),
];

/// Look up a surah by its number (1-114)
pub fn surah_by_number(number: u16) -> Option<&'static SurahInfo> {
    number
        .checked_sub(1)
        .and_then(|index| SURAHS.get(usize::from(index)))
}
