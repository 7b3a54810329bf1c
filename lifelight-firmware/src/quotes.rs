//! The quote table
//!
//! An injected list of opaque strings as far as the rest of the firmware is
//! concerned; the picker guarantees no repeats until all 64 have scrolled
//! past once. Keep entries reasonably short - at 35 ms per column a long
//! line takes a while.

use lifelight_core::quotes::QUOTE_COUNT;

pub static QUOTES: [&str; QUOTE_COUNT as usize] = [
    "The best way out is always through.",
    "What we think, we become.",
    "Well begun is half done.",
    "Fortune favors the bold.",
    "No wind favors a ship without a destination.",
    "Simplicity is the ultimate sophistication.",
    "A journey of a thousand miles begins with a single step.",
    "Measure twice, cut once.",
    "Still waters run deep.",
    "Make haste slowly.",
    "The obstacle is the way.",
    "Practice is the best of all instructors.",
    "Little strokes fell great oaks.",
    "He who hesitates is lost.",
    "Look before you leap.",
    "All things are difficult before they are easy.",
    "A smooth sea never made a skilled sailor.",
    "The early bird catches the worm.",
    "Actions speak louder than words.",
    "Slow and steady wins the race.",
    "Nothing ventured, nothing gained.",
    "Rome was not built in a day.",
    "Strike while the iron is hot.",
    "Many hands make light work.",
    "Too many cooks spoil the broth.",
    "Every cloud has a silver lining.",
    "Do not count your chickens before they hatch.",
    "A watched pot never boils.",
    "When in Rome, do as the Romans do.",
    "The pen is mightier than the sword.",
    "Honesty is the best policy.",
    "Absence makes the heart grow fonder.",
    "Practice makes perfect.",
    "Knowledge is power.",
    "Time and tide wait for no one.",
    "Necessity is the mother of invention.",
    "A picture is worth a thousand words.",
    "Better late than never.",
    "Birds of a feather flock together.",
    "Do not put all your eggs in one basket.",
    "Good things come to those who wait.",
    "If it ain't broke, don't fix it.",
    "It takes two to tango.",
    "Curiosity killed the cat.",
    "The grass is always greener on the other side.",
    "There is no place like home.",
    "Two heads are better than one.",
    "You can't judge a book by its cover.",
    "The squeaky wheel gets the grease.",
    "When the going gets tough, the tough get going.",
    "A chain is only as strong as its weakest link.",
    "Beggars can't be choosers.",
    "Don't bite the hand that feeds you.",
    "Easy come, easy go.",
    "Great minds think alike.",
    "Half a loaf is better than none.",
    "It never rains but it pours.",
    "Let sleeping dogs lie.",
    "Out of sight, out of mind.",
    "Practice what you preach.",
    "The proof of the pudding is in the eating.",
    "Where there's a will, there's a way.",
    "You reap what you sow.",
    "All's well that ends well.",
];
