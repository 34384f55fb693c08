//! Item table. Sorted by id; the catalog looks entries up by binary search.

use super::ItemCategory::{
    Crafting, Gear, Item, Junk, Menu, PocketCircuit, Valuable, ValuableJunk, Weapon,
};
use super::ItemDesc;

#[rustfmt::skip]
pub const ITEMS: &[ItemDesc] = &[
    ItemDesc::new(   1, "(locked item slot)", Junk),
    ItemDesc::new(   2, "Toughness Light", Item),
    ItemDesc::new(   3, "Toughness Z", Item),
    ItemDesc::new(   4, "Toughness ZZ", Item),
    ItemDesc::new(   5, "Toughness Emperor", Item),
    ItemDesc::new(   6, "Toughness Infinity", Item),
    ItemDesc::new(   7, "Tauriner", Item),
    ItemDesc::new(   8, "Tauriner +", Item),
    ItemDesc::new(   9, "Tauriner ++", Item),
    ItemDesc::new(  10, "Tauriner Maximum", Item),
    ItemDesc::new(  11, "Staminan Light", Item),
    ItemDesc::new(  12, "Staminan X", Item),
    ItemDesc::new(  13, "Staminan XX", Item),
    ItemDesc::new(  14, "Staminan Royale", Item),
    ItemDesc::new(  15, "Staminan Spark", Item),
    ItemDesc::new(  16, "AppStim RX", Item),
    ItemDesc::new(  18, "Miso Ramen", Item),
    ItemDesc::new(  19, "Squid Yakisoba", Item),
    ItemDesc::new(  22, "Oden Soup", Item),
    ItemDesc::new(  23, "Seaweed Rice Ball", Item),
    ItemDesc::new(  24, "Tuna Rice Ball", Item),
    ItemDesc::new(  25, "Salmon Rice Ball", Item),
    ItemDesc::new(  26, "Diehard Drink", Item),
    ItemDesc::new(  27, "Diehard MAX", Item),
    ItemDesc::new(  28, "Super Turmeric No. 1", Item),
    ItemDesc::new(  29, "Daikoku Black Sesame Kinako", Item),
    ItemDesc::new(  30, "Daikoku Okinawan Black Candy", Item),
    ItemDesc::new(  31, "Ginger Quince", Item),
    ItemDesc::new(  32, "Extreme Lemon", Item),
    ItemDesc::new(  33, "Extreme Lemon Sticks", Item),
    ItemDesc::new(  35, "Ointment", Item),
    ItemDesc::new(  36, "Mandarin Orange", Item),
    ItemDesc::new(  38, "Sake", Item),
    ItemDesc::new(  39, "Scotch Whisky", Item),
    ItemDesc::new(  40, "Champagne", Item),
    ItemDesc::new(  41, "Sweet Potato Shochu", Item),
    ItemDesc::new(  42, "Pocket Tissues", Item),
    ItemDesc::new(  43, "Confection Gift Box", Item),
    ItemDesc::new(  67, "Crayfish", Item).max_in_inv(99),
    ItemDesc::new(  68, "Whitebait", Item).max_in_inv(99),
    ItemDesc::new(  69, "Goby", Item).max_in_inv(99),
    ItemDesc::new(  70, "Porcupinefish", Item).max_in_inv(99),
    ItemDesc::new(  71, "Crucian", Item).max_in_inv(99),
    ItemDesc::new(  72, "Sweetfish", Item).max_in_inv(99),
    ItemDesc::new(  73, "Squid", Item).max_in_inv(99),
    ItemDesc::new(  74, "Eel", Item).max_in_inv(99),
    ItemDesc::new(  75, "Electric Catfish", Item),
    ItemDesc::new(  76, "Filefish", Item).max_in_inv(99),
    ItemDesc::new(  77, "Tiger Prawn", Item).max_in_inv(99),
    ItemDesc::new(  78, "Koi Carp", Item).max_in_inv(99),
    ItemDesc::new(  79, "Octopus", Item).max_in_inv(99),
    ItemDesc::new(  80, "Conger Eel", Item).max_in_inv(99),
    ItemDesc::new(  81, "Scorpionfish", Item).max_in_inv(99),
    ItemDesc::new(  82, "Flounder", Item).max_in_inv(99),
    ItemDesc::new(  83, "Softshell Turtle", Item).max_in_inv(99),
    ItemDesc::new(  84, "Spider Crab", Item).max_in_inv(99),
    ItemDesc::new(  85, "Nishiki Carp", Item).max_in_inv(99),
    ItemDesc::new(  86, "Rainbow Trout", Item).max_in_inv(99),
    ItemDesc::new(  87, "Salmon", Item).max_in_inv(99),
    ItemDesc::new(  88, "Fugu", Item).max_in_inv(99),
    ItemDesc::new(  89, "Great White", Item).max_in_inv(99),
    ItemDesc::new(  90, "Sea Bream", Item).max_in_inv(99),
    ItemDesc::new(  91, "Ito", Item).max_in_inv(99),
    ItemDesc::new(  92, "Marlin", Item).max_in_inv(99),
    ItemDesc::new(  93, "Ghost Koi", Item).max_in_inv(99),
    ItemDesc::new(  94, "Tuna", Item).max_in_inv(99),
    ItemDesc::new(  95, "Oarfish", Item).max_in_inv(99),
    ItemDesc::new(  98, "Blended Coffee", Menu),
    ItemDesc::new(  99, "Blue Mountain", Menu),
    ItemDesc::new( 100, "Mocha", Menu),
    ItemDesc::new( 101, "Earl Grey Tea", Menu),
    ItemDesc::new( 102, "Strawberry Parfait", Menu),
    ItemDesc::new( 103, "Chocolate Parfait", Menu),
    ItemDesc::new( 104, "Cake Set", Menu),
    ItemDesc::new( 105, "Toast Set", Menu),
    ItemDesc::new( 106, "Sandwich Set", Menu),
    ItemDesc::new( 107, "Original Beef Curry", Menu),
    ItemDesc::new( 108, "Test (bowl of food)", Junk).max_in_box(1),
    ItemDesc::new( 109, "Yamazaki 12 Years Old", Menu),
    ItemDesc::new( 110, "Platinum Plate", Item).max_in_inv(99),
    ItemDesc::new( 111, "Gold Plate", Item).max_in_inv(99),
    ItemDesc::new( 112, "Silver Plate", Item).max_in_inv(99),
    ItemDesc::new( 113, "Bronze Plate", Item).max_in_inv(99),
    ItemDesc::new( 114, "Iron Plate", Item).max_in_inv(99),
    ItemDesc::new( 115, "Cash In 1,000 Betting Pts.", Junk),
    ItemDesc::new( 116, "Cash In 10,000 Betting Pts.", Junk),
    ItemDesc::new( 117, "Convert 1,000 Mon to Betting Pts.", Junk),
    ItemDesc::new( 118, "Convert 1 Ryo to Betting Pts.", Junk),
    ItemDesc::new( 119, "Cash in 1,000 Pts.", Junk),
    ItemDesc::new( 120, "Cash in 10,000 Pts.", Junk),
    ItemDesc::new( 131, "Kamurocho Fun Pack 03", Junk).max_in_inv(99),
    ItemDesc::new( 132, "Kamurocho Fun Pack 04", Junk).max_in_inv(99),
    ItemDesc::new( 133, "Kamurocho Fun Pack 05", Junk).max_in_inv(99),
    ItemDesc::new( 134, "Kamurocho Fun Pack 06", Junk).max_in_inv(99),
    ItemDesc::new( 135, "Kamurocho Fun Pack 07", Junk).max_in_inv(99),
    ItemDesc::new( 136, "Kamurocho Fun Pack 08", Junk).max_in_inv(99),
    ItemDesc::new( 137, "Test Katana", Junk).max_in_box(1),
    ItemDesc::new( 139, "Test Tonfa", Junk).max_in_box(1),
    ItemDesc::new( 140, "Test Kali Sticks", Junk).max_in_box(1),
    ItemDesc::new( 141, "Test Staff", Junk).max_in_box(1),
    ItemDesc::new( 142, "Test Hammer", Weapon).strikes(6),
    ItemDesc::new( 143, "Test Nunchaku", Junk).max_in_box(1),
    ItemDesc::new( 144, "Test Bat", Junk).max_in_box(1),
    ItemDesc::new( 145, "Test Gun", Weapon).ammo(0),
    ItemDesc::new( 146, "Test Bayonet", Junk).max_in_box(1),
    ItemDesc::new( 147, "Master Ball (non-legitimate)", Junk).max_in_box(1),
    ItemDesc::new( 148, "The Hedgeball", Junk).max_in_box(1),
    ItemDesc::new( 163, "Mahjong Sticks", ValuableJunk),
    ItemDesc::new( 165, "Shogi Points", Valuable).hard_index(0),
    ItemDesc::new( 167, "Completion List", ValuableJunk),
    ItemDesc::new( 168, "Piping Hot Takoyaki", Valuable),
    ItemDesc::new( 169, "House Darts", ValuableJunk),
    ItemDesc::new( 170, "Standard Darts", Valuable).hard_index(14),
    ItemDesc::new( 171, "Custom Darts", Valuable).hard_index(15),
    ItemDesc::new( 172, "Sniper Darts", Valuable).hard_index(16),
    ItemDesc::new( 173, "Battle-Tested Darts", Valuable).hard_index(17),
    ItemDesc::new( 174, "Money", ValuableJunk),
    ItemDesc::new( 175, "Experience Points", ValuableJunk),
    ItemDesc::new( 188, "Champagne Tower (no icon)", Menu),
    ItemDesc::new( 189, "Gold Champagne (no icon)", Menu),
    ItemDesc::new( 190, "Rosé Champagne (no icon)", Menu),
    ItemDesc::new( 191, "Black Champagne (no icon)", Menu),
    ItemDesc::new( 192, "White Champagne (no icon)", Menu),
    ItemDesc::new( 193, "Yamazaki 12 Years Old (no icon)", Menu),
    ItemDesc::new( 194, "Beer (no icon)", Menu),
    ItemDesc::new( 195, "Cassis & Orange (no icon)", Menu),
    ItemDesc::new( 196, "Orange Juice (no icon)", Menu),
    ItemDesc::new( 197, "Kyogetsu Green (no icon)", Menu),
    ItemDesc::new( 198, "Gacha Drink (no icon)", Menu),
    ItemDesc::new( 199, "Drink 11 (no icon)", Menu),
    ItemDesc::new( 200, "Drink 12 (no icon)", Menu),
    ItemDesc::new( 201, "Drink 13 (no icon)", Menu),
    ItemDesc::new( 202, "Drink 14 (no icon)", Menu),
    ItemDesc::new( 203, "Drink 15 (no icon)", Menu),
    ItemDesc::new( 204, "Fruit Platter (no icon)", Menu),
    ItemDesc::new( 205, "Carbonara (no icon)", Menu),
    ItemDesc::new( 206, "Chicken Karaage (no icon)", Menu),
    ItemDesc::new( 207, "Vegetable Sticks (no icon)", Menu),
    ItemDesc::new( 208, "Dried Ray Fin (no icon)", Menu),
    ItemDesc::new( 209, "Takoyaki (no icon)", Menu),
    ItemDesc::new( 210, "French Fries (no icon)", Menu),
    ItemDesc::new( 211, "Pasta Sticks (no icon)", Menu),
    ItemDesc::new( 212, "Edamame (no icon)", Menu),
    ItemDesc::new( 213, "Mixed Nuts (no icon)", Menu),
    ItemDesc::new( 214, "Ice Cream (no icon)", Menu),
    ItemDesc::new( 215, "Chocolate Sticks (no icon)", Menu),
    ItemDesc::new( 216, "Food 12 (no icon)", Menu),
    ItemDesc::new( 217, "Food 13 (no icon)", Menu),
    ItemDesc::new( 218, "Food 14 (no icon)", Menu),
    ItemDesc::new( 219, "Food 15 (no icon)", Menu),
    ItemDesc::new( 220, "Sturdy Iron Pipe", Weapon).strikes(0),
    ItemDesc::new( 221, "Extremely Sturdy Iron Pipe", Weapon).strikes(0),
    ItemDesc::new( 222, "Lumber", Weapon).strikes(12),
    ItemDesc::new( 223, "Iron Pipe", Weapon).strikes(18),
    ItemDesc::new( 224, "Superalloy Pipe", Weapon).strikes(20),
    ItemDesc::new( 225, "Police Baton", Weapon).strikes(16),
    ItemDesc::new( 226, "Modified Police Baton", Weapon).strikes(18),
    ItemDesc::new( 227, "Gentleman's Umbrella", Weapon).strikes(15),
    ItemDesc::new( 228, "Colorful Parasol", Weapon).strikes(22),
    ItemDesc::new( 229, "Antique Oilpaper Umbrella", Weapon).strikes(26),
    ItemDesc::new( 230, "Blackjack", Weapon).strikes(12),
    ItemDesc::new( 231, "Ballbuster", Weapon).strikes(14),
    ItemDesc::new( 232, "Golden Blackjack", Weapon).strikes(16),
    ItemDesc::new( 233, "Master Ball", Weapon).strikes(12),
    ItemDesc::new( 234, "Dagger", Weapon).strikes(12),
    ItemDesc::new( 235, "Masterwork Dagger", Weapon).strikes(14),
    ItemDesc::new( 236, "Goemon", Weapon).strikes(18),
    ItemDesc::new( 237, "Legendary Shintogo", Weapon).strikes(22),
    ItemDesc::new( 238, "Dragon God Shortsword", Weapon).strikes(24),
    ItemDesc::new( 239, "Sturdy Knife", Weapon).strikes(0),
    ItemDesc::new( 240, "Extremely Sturdy Knife", Weapon).strikes(0),
    ItemDesc::new( 241, "Butterfly Knife", Weapon).strikes(10),
    ItemDesc::new( 242, "Super Spicy Knife", Weapon).strikes(14),
    ItemDesc::new( 243, "Chinese Broadsword", Weapon).strikes(16),
    ItemDesc::new( 244, "Lotus Clan Broadsword", Weapon).strikes(20),
    ItemDesc::new( 245, "Emperor Guan's Broadsword", Weapon).strikes(24),
    ItemDesc::new( 246, "Old Stun Gun", Weapon).strikes(6),
    ItemDesc::new( 247, "Stun Gun", Weapon).strikes(15),
    ItemDesc::new( 248, "Hyper Stun Gun", Weapon).strikes(18),
    ItemDesc::new( 249, "Sturdy Bat", Weapon).strikes(0),
    ItemDesc::new( 250, "Extremely Sturdy Bat", Weapon).strikes(0),
    ItemDesc::new( 251, "Metal Bat", Weapon).strikes(30),
    ItemDesc::new( 252, "Spiked Bat", Weapon).strikes(18),
    ItemDesc::new( 253, "Patriarch's Bat", Weapon).strikes(22),
    ItemDesc::new( 254, "Superalloy Bat", Weapon).strikes(32),
    ItemDesc::new( 255, "Legendary Kinryu Bat", Weapon).strikes(22),
    ItemDesc::new( 256, "Wooden Driver", Weapon).strikes(8),
    ItemDesc::new( 257, "Metal Iron", Weapon).strikes(14),
    ItemDesc::new( 258, "Patriarch's Driver", Weapon).strikes(12),
    ItemDesc::new( 259, "Dragon Driver", Weapon).strikes(22),
    ItemDesc::new( 260, "Sturdy Wooden Katana", Weapon).strikes(0),
    ItemDesc::new( 261, "Extremely Sturdy Wooden Katana", Weapon).strikes(0),
    ItemDesc::new( 262, "Wooden Katana", Weapon).strikes(16),
    ItemDesc::new( 263, "Sacred Wooden Katana", Weapon).strikes(24),
    ItemDesc::new( 264, "Nameless Katana", Weapon).strikes(12),
    ItemDesc::new( 265, "Sakura Storm", Weapon).strikes(18),
    ItemDesc::new( 266, "Morning Tempest", Weapon).strikes(20),
    ItemDesc::new( 267, "Yoshiyuki", Weapon).strikes(20),
    ItemDesc::new( 268, "Sunburst", Weapon).strikes(22),
    ItemDesc::new( 269, "Celestial Steed", Weapon).strikes(24),
    ItemDesc::new( 270, "Dragon Slayer", Weapon).strikes(20),
    ItemDesc::new( 271, "Ama no Murakumo", Weapon).strikes(24),
    ItemDesc::new( 272, "Photon Blade Prototype", Weapon).strikes(24),
    ItemDesc::new( 273, "Sturdy Iron Hammer", Weapon).strikes(0),
    ItemDesc::new( 274, "Extremely Sturdy Iron Hammer", Weapon).strikes(0),
    ItemDesc::new( 275, "Big Festival Fan", Weapon).strikes(10),
    ItemDesc::new( 276, "Iron Hammer", Weapon).strikes(6),
    ItemDesc::new( 277, "Warning Sign", Weapon).strikes(1),
    ItemDesc::new( 278, "Fortune Mallet", Weapon).strikes(7),
    ItemDesc::new( 279, "Frozen Tuna", Weapon).strikes(12),
    ItemDesc::new( 280, "Raging Dragon Hammer", Weapon).strikes(9),
    ItemDesc::new( 281, "Yagyu Greatsword", Weapon).strikes(12),
    ItemDesc::new( 282, "Exorcism Greatsword", Weapon).strikes(15),
    ItemDesc::new( 283, "Sturdy Pole", Weapon).strikes(0),
    ItemDesc::new( 284, "Extremely Sturdy Pole", Weapon).strikes(0),
    ItemDesc::new( 285, "Long Lumber", Weapon).strikes(9),
    ItemDesc::new( 286, "Six-Fluted Pole", Weapon).strikes(12),
    ItemDesc::new( 287, "Collapsible Steel Staff", Weapon).strikes(18),
    ItemDesc::new( 288, "Sacred Wooden Staff", Weapon).strikes(24),
    ItemDesc::new( 289, "Thunder God Staff", Weapon).strikes(26),
    ItemDesc::new( 290, "Assassin's Spear", Weapon).strikes(18),
    ItemDesc::new( 291, "L Photon Blade Prototype", Weapon).strikes(15),
    ItemDesc::new( 292, "Cleaving Pole", Weapon).strikes(18),
    ItemDesc::new( 293, "Great Marlin", Weapon).strikes(20),
    ItemDesc::new( 294, "Mighty Dragon Spear", Weapon).strikes(26),
    ItemDesc::new( 295, "Golden Rifle", Weapon).ammo(12),
    ItemDesc::new( 296, "Broken M1985", Weapon).ammo(10),
    ItemDesc::new( 297, "EXPULSION S-12", Weapon).ammo(18),
    ItemDesc::new( 298, "MJM56-55 Exorcist", Weapon).ammo(21),
    ItemDesc::new( 299, "Slime Gun", Weapon).ammo(16),
    ItemDesc::new( 300, "Zap Gun", Weapon).ammo(18),
    ItemDesc::new( 301, "Smoke Gun", Weapon).ammo(20),
    ItemDesc::new( 302, "Sturdy Brass Knuckles", Weapon).strikes(0),
    ItemDesc::new( 303, "Extremely Sturdy Brass Knuckles", Weapon).strikes(0),
    ItemDesc::new( 304, "Brass Knuckles", Weapon).strikes(18),
    ItemDesc::new( 305, "Steel Knuckles", Weapon).strikes(24),
    ItemDesc::new( 306, "Konpeito", Weapon).strikes(28),
    ItemDesc::new( 307, "Dragon Grudge Fists", Weapon).strikes(32),
    ItemDesc::new( 308, "Bagh Naka", Weapon).strikes(12),
    ItemDesc::new( 309, "Assassin's Bagh Naka", Weapon).strikes(16),
    ItemDesc::new( 310, "Tiger Bagh Naka", Weapon).strikes(20),
    ItemDesc::new( 311, "Bottomless Lighter", Weapon).strikes(0),
    ItemDesc::new( 312, "Modified Bottomless Lighter", Weapon).ammo(0),
    ItemDesc::new( 313, "Modified Lighter", Weapon).ammo(10),
    ItemDesc::new( 314, "Modified Deluxe Lighter", Weapon).ammo(18),
    ItemDesc::new( 315, "Slime Spray", Weapon).ammo(10),
    ItemDesc::new( 316, "Venom Spray", Weapon).ammo(12),
    ItemDesc::new( 317, "Table Salt", Weapon).strikes(6),
    ItemDesc::new( 318, "Firecracker", Weapon).strikes(10),
    ItemDesc::new( 319, "Steel Business Card", Weapon).strikes(30),
    ItemDesc::new( 320, "Marlin Cannon", Weapon).ammo(7),
    ItemDesc::new( 321, "Cannon", Weapon).ammo(4),
    ItemDesc::new( 322, "Destroyer of Lands", Weapon).ammo(5),
    ItemDesc::new( 323, "Sturdy Tonfa", Weapon).strikes(0),
    ItemDesc::new( 324, "Extremely Sturdy Tonfa", Weapon).strikes(0),
    ItemDesc::new( 325, "Wooden Tonfa", Weapon).strikes(15),
    ItemDesc::new( 326, "Carbon Tonfa", Weapon).strikes(18),
    ItemDesc::new( 327, "Steel Tonfa", Weapon).strikes(26),
    ItemDesc::new( 328, "Slashing Tonfa", Weapon).strikes(22),
    ItemDesc::new( 329, "Steel Crowbar", Weapon).strikes(20),
    ItemDesc::new( 330, "Yinglong Tonfa", Weapon).strikes(28),
    ItemDesc::new( 331, "Dragon Horn", Weapon).strikes(30),
    ItemDesc::new( 332, "Sturdy Nunchaku", Weapon).strikes(0),
    ItemDesc::new( 333, "Extremely Sturdy Nunchaku", Weapon).strikes(0),
    ItemDesc::new( 334, "Wooden Nunchaku", Weapon).strikes(15),
    ItemDesc::new( 335, "Carbon Nunchaku", Weapon).strikes(18),
    ItemDesc::new( 336, "Frozen Sardines", Weapon).strikes(15),
    ItemDesc::new( 337, "Spark 15000V", Weapon).strikes(20),
    ItemDesc::new( 338, "Daikon Nunchaku", Weapon).strikes(15),
    ItemDesc::new( 339, "Dynamite Nunchaku", Weapon).strikes(22),
    ItemDesc::new( 340, "Dragon Nunchaku", Weapon).strikes(30),
    ItemDesc::new( 341, "Sickle Nunchaku", Weapon).strikes(18),
    ItemDesc::new( 342, "Baiken", Weapon).strikes(20),
    ItemDesc::new( 343, "Sturdy Kali Sticks", Weapon).strikes(0),
    ItemDesc::new( 344, "Extremely Sturdy Kali Sticks", Weapon).strikes(0),
    ItemDesc::new( 345, "Double Slats", Weapon).strikes(12),
    ItemDesc::new( 346, "Wooden Kali Sticks", Weapon).strikes(18),
    ItemDesc::new( 347, "Spiked Taiko Sticks", Weapon).strikes(20),
    ItemDesc::new( 348, "Double Feathered Fans", Weapon).strikes(20),
    ItemDesc::new( 349, "Twin Dragon Sticks", Weapon).strikes(24),
    ItemDesc::new( 350, "Musashi's Wooden Katana", Weapon).strikes(32),
    ItemDesc::new( 351, "Double Chinese Broadswords", Weapon).strikes(18),
    ItemDesc::new( 352, "Guan & Lotus Broadswords", Weapon).strikes(26),
    ItemDesc::new( 353, "Modified Model Gun", Weapon).ammo(10),
    ItemDesc::new( 354, "Antique Gun", Weapon).ammo(6),
    ItemDesc::new( 355, "9mm Automatic Pistol", Weapon).ammo(10),
    ItemDesc::new( 356, "Double Action Revolver", Weapon).ammo(6),
    ItemDesc::new( 357, "Drow-Z 55", Weapon).ammo(18),
    ItemDesc::new( 358, "Tiger's Bane", Weapon).ammo(10),
    ItemDesc::new( 359, "Mr. Random", Weapon).ammo(25),
    ItemDesc::new( 360, "Golden Pistol", Weapon).ammo(0),
    ItemDesc::new( 361, "Manga Magazine", Gear),
    ItemDesc::new( 362, "Binding", Gear),
    ItemDesc::new( 363, "Sarong", Gear),
    ItemDesc::new( 364, "Bloody Binding", Gear),
    ItemDesc::new( 365, "Fighter's Binding", Gear),
    ItemDesc::new( 366, "Elder's Belly Warmer", Gear),
    ItemDesc::new( 367, "Hawker's Belly Warmer", Gear),
    ItemDesc::new( 368, "Fur Belly Warmer", Gear),
    ItemDesc::new( 369, "Lucky Binding", Gear),
    ItemDesc::new( 370, "Gambler's Binding", Gear),
    ItemDesc::new( 371, "Secret Stash Binding", Gear),
    ItemDesc::new( 372, "Fearless Binding", Gear),
    ItemDesc::new( 373, "Dragon's Binding", Gear),
    ItemDesc::new( 374, "Chain Mail", Gear),
    ItemDesc::new( 375, "Battle Mail", Gear),
    ItemDesc::new( 376, "Steel Mail", Gear),
    ItemDesc::new( 377, "Antique Chain Mail", Gear),
    ItemDesc::new( 378, "Chain Shirt", Gear),
    ItemDesc::new( 379, "Regal Chain Shirt", Gear),
    ItemDesc::new( 380, "Dragon Mail", Gear),
    ItemDesc::new( 381, "Fireproof Shirt", Gear),
    ItemDesc::new( 382, "Insulated Shirt", Gear),
    ItemDesc::new( 383, "Baseball Shirt", Gear),
    ItemDesc::new( 384, "Tour T-Shirt", Gear),
    ItemDesc::new( 385, "Avarice Shirt", Gear),
    ItemDesc::new( 386, "Wild Shirt", Gear),
    ItemDesc::new( 387, "Celestial Garb", Gear),
    ItemDesc::new( 388, "Dragon Shirt", Gear),
    ItemDesc::new( 389, "Metal Jacket", Gear),
    ItemDesc::new( 390, "Jet Black Jacket", Gear),
    ItemDesc::new( 391, "Military Jacket", Gear),
    ItemDesc::new( 392, "Yakuza Training Gear", Gear),
    ItemDesc::new( 393, "Training Gear", Gear),
    ItemDesc::new( 394, "Makoto Surcoat", Gear),
    ItemDesc::new( 395, "Comfy Soles", Gear),
    ItemDesc::new( 396, "Contact Lenses", Gear),
    ItemDesc::new( 397, "Springy Arm Guards", Gear),
    ItemDesc::new( 398, "Secret Wallet", Gear),
    ItemDesc::new( 399, "Gauntlets", Gear),
    ItemDesc::new( 400, "Alertness Hood", Gear),
    ItemDesc::new( 401, "Steel Shin Guards", Gear),
    ItemDesc::new( 402, "Silent Shoes", Gear),
    ItemDesc::new( 403, "Mew Shoes", Gear),
    ItemDesc::new( 404, "Headgear", Gear),
    ItemDesc::new( 405, "Security Wallet", Gear),
    ItemDesc::new( 406, "High-Tech Arm Guards", Gear),
    ItemDesc::new( 407, "High-Tech Shin Guards", Gear),
    ItemDesc::new( 408, "Hercules Gloves", Gear),
    ItemDesc::new( 409, "Leech Gloves", Gear),
    ItemDesc::new( 410, "Rage Ring", Gear),
    ItemDesc::new( 411, "Tourmaline Bracelet", Gear),
    ItemDesc::new( 412, "Debt Collector's Necklace", Gear),
    ItemDesc::new( 413, "Sacrifice Stone", Gear),
    ItemDesc::new( 414, "Tattered Scarf", Gear),
    ItemDesc::new( 415, "Champion's Ring", Gear),
    ItemDesc::new( 416, "Head Honcho Scarf", Gear),
    ItemDesc::new( 417, "Ebisu Socks", Gear),
    ItemDesc::new( 418, "Beads of Good Fortune", Gear),
    ItemDesc::new( 419, "Celebrity Perfume", Gear),
    ItemDesc::new( 420, "Payback Ring", Gear),
    ItemDesc::new( 421, "Dragon God Amulet", Gear),
    ItemDesc::new( 422, "Mad Dog Gloves", Gear),
    ItemDesc::new( 423, "Protective Amulet", Gear),
    ItemDesc::new( 424, "Bulletproof Glass Amulet", Gear),
    ItemDesc::new( 425, "Goddess of Children Amulet", Gear),
    ItemDesc::new( 426, "Berserker Charm", Gear),
    ItemDesc::new( 427, "Traveler's Amulet", Gear),
    ItemDesc::new( 428, "Benkei's Amulet", Gear),
    ItemDesc::new( 429, "War God Talisman", Gear),
    ItemDesc::new( 430, "Leather Belt", Gear),
    ItemDesc::new( 431, "Black Belt", Gear),
    ItemDesc::new( 432, "Boozer Belt", Gear),
    ItemDesc::new( 433, "Immovable Belt", Gear),
    ItemDesc::new( 434, "Sprite Belt", Gear),
    ItemDesc::new( 435, "Collateral Damage Belt", Gear),
    ItemDesc::new( 436, "Magic Belt", Gear),
    ItemDesc::new( 437, "Charismatic Photo", Gear),
    ItemDesc::new( 438, "Calming Towel", Gear),
    ItemDesc::new( 439, "Charismatic Autobiography", Gear),
    ItemDesc::new( 441, "Card Watcher", Gear),
    ItemDesc::new( 442, "Encounter Finder", Gear),
    ItemDesc::new( 443, "Trouble Finder", Gear),
    ItemDesc::new( 444, "Magnetic Necklace", Gear),
    ItemDesc::new( 445, "Thug Necklace", Gear),
    ItemDesc::new( 446, "Slugger Necklace", Gear),
    ItemDesc::new( 447, "Breaker Necklace", Gear),
    ItemDesc::new( 448, "Mad Dog Collar", Gear),
    ItemDesc::new( 449, "Brawler Amulet", Gear),
    ItemDesc::new( 450, "Rush Amulet", Gear),
    ItemDesc::new( 451, "Beast Amulet", Gear),
    ItemDesc::new( 452, "Dojima Family Amulet", Gear),
    ItemDesc::new( 453, "Amon Sunglasses", Gear),
    ItemDesc::new( 454, "Iron", Crafting).hard_index(0),
    ItemDesc::new( 455, "Lead Ingot", Crafting).hard_index(1),
    ItemDesc::new( 456, "Screw", Crafting).hard_index(2),
    ItemDesc::new( 457, "Spring", Crafting).hard_index(3),
    ItemDesc::new( 458, "Chain", Crafting).hard_index(4),
    ItemDesc::new( 459, "Quality Iron", Crafting).hard_index(5),
    ItemDesc::new( 460, "Steel", Crafting).hard_index(6),
    ItemDesc::new( 461, "Quality Screw", Crafting).hard_index(7),
    ItemDesc::new( 462, "Black Metal Powder", Crafting).hard_index(8),
    ItemDesc::new( 463, "White Metal Powder", Crafting).hard_index(9),
    ItemDesc::new( 464, "Silver Metal Powder", Crafting).hard_index(10),
    ItemDesc::new( 465, "Gold Metal Powder", Crafting).hard_index(11),
    ItemDesc::new( 466, "Shape Memory Alloy", Crafting).hard_index(12),
    ItemDesc::new( 467, "Silver Ingot", Crafting).hard_index(13),
    ItemDesc::new( 468, "Gold Ingot", Crafting).hard_index(14),
    ItemDesc::new( 470, "Grinding Stone", Crafting).hard_index(15),
    ItemDesc::new( 471, "Magnet", Crafting).hard_index(16),
    ItemDesc::new( 472, "Volcanic Rock", Crafting).hard_index(17),
    ItemDesc::new( 473, "Glass", Crafting).hard_index(18),
    ItemDesc::new( 474, "Obsidian", Crafting).hard_index(19),
    ItemDesc::new( 475, "Amber", Crafting).hard_index(20),
    ItemDesc::new( 476, "Fluorite", Crafting).hard_index(21),
    ItemDesc::new( 477, "Tourmaline", Crafting).hard_index(22),
    ItemDesc::new( 478, "Crystal", Crafting).hard_index(23),
    ItemDesc::new( 479, "Emerald", Crafting).hard_index(24),
    ItemDesc::new( 480, "Pearl", Crafting).hard_index(25),
    ItemDesc::new( 481, "Ruby", Crafting).hard_index(26),
    ItemDesc::new( 482, "Diamond", Crafting).hard_index(27),
    ItemDesc::new( 483, "Rainbow Shard", Crafting).hard_index(28),
    ItemDesc::new( 484, "Mystery Stone", Crafting).hard_index(29),
    ItemDesc::new( 485, "Iron Gear", Crafting).hard_index(30),
    ItemDesc::new( 486, "IC Chip", Crafting).hard_index(31),
    ItemDesc::new( 487, "Printed Circuit Board", Crafting).hard_index(32),
    ItemDesc::new( 488, "High Performance PCB", Crafting).hard_index(33),
    ItemDesc::new( 489, "High-Voltage Battery Prototype", Crafting).hard_index(34),
    ItemDesc::new( 490, "Gravity Converter Test Device", Crafting).hard_index(35),
    ItemDesc::new( 491, "Plastic", Crafting).hard_index(36),
    ItemDesc::new( 492, "Rubber", Crafting).hard_index(37),
    ItemDesc::new( 493, "Reinforced Plastic", Crafting).hard_index(38),
    ItemDesc::new( 494, "Petroleum Coke", Crafting).hard_index(39),
    ItemDesc::new( 495, "Synthetic Fiber", Crafting).hard_index(40),
    ItemDesc::new( 496, "Dry Branch", Crafting).hard_index(41),
    ItemDesc::new( 497, "Carved Wooden Bear", Crafting).hard_index(42),
    ItemDesc::new( 498, "Timber", Crafting).hard_index(43),
    ItemDesc::new( 499, "Driftwood", Crafting).hard_index(44),
    ItemDesc::new( 500, "Carbon Fiber", Crafting).hard_index(45),
    ItemDesc::new( 501, "Sturdy Wood", Crafting).hard_index(46),
    ItemDesc::new( 502, "Ash Wood", Crafting).hard_index(47),
    ItemDesc::new( 503, "Sacred Leaves", Crafting).hard_index(48),
    ItemDesc::new( 504, "Sacred Wood", Crafting).hard_index(49),
    ItemDesc::new( 505, "Yew Branch", Crafting).hard_index(50),
    ItemDesc::new( 506, "Animal Skin", Crafting).hard_index(51),
    ItemDesc::new( 507, "Pristine Skin", Crafting).hard_index(52),
    ItemDesc::new( 508, "Quality Leather", Crafting).hard_index(53),
    ItemDesc::new( 509, "Bear Skin", Crafting).hard_index(54),
    ItemDesc::new( 510, "Thoroughbred Mane", Crafting).hard_index(55),
    ItemDesc::new( 511, "Wild Beast Skin", Crafting).hard_index(56),
    ItemDesc::new( 512, "Divine Beast Skin", Crafting).hard_index(57),
    ItemDesc::new( 513, "Sturdy Thread", Crafting).hard_index(58),
    ItemDesc::new( 514, "Linen Cloth", Crafting).hard_index(59),
    ItemDesc::new( 515, "Indian Cotton Cloth", Crafting).hard_index(60),
    ItemDesc::new( 516, "Wool", Crafting).hard_index(61),
    ItemDesc::new( 517, "Silk Cloth", Crafting).hard_index(62),
    ItemDesc::new( 518, "Cashmere Cloth", Crafting).hard_index(63),
    ItemDesc::new( 519, "Rainbow Textile", Crafting).hard_index(64),
    ItemDesc::new( 520, "Firework Shell", Crafting).hard_index(65),
    ItemDesc::new( 521, "Gunpowder", Crafting).hard_index(66),
    ItemDesc::new( 522, "Enhanced Gunpowder", Crafting).hard_index(67),
    ItemDesc::new( 523, "Explosive", Crafting).hard_index(68),
    ItemDesc::new( 524, "Military Explosive", Crafting).hard_index(69),
    ItemDesc::new( 525, "Straw Effigy", Crafting).hard_index(70),
    ItemDesc::new( 526, "Happy Doll", Crafting).hard_index(71),
    ItemDesc::new( 528, "Jet Black Belt", Crafting).hard_index(72),
    ItemDesc::new( 529, "Cursed Handcuffs", Crafting).hard_index(73),
    ItemDesc::new( 530, "Water God Stone", Crafting).hard_index(74),
    ItemDesc::new( 531, "Flint Stone", Crafting).hard_index(75),
    ItemDesc::new( 532, "Bloodied Cloth", Crafting).hard_index(76),
    ItemDesc::new( 533, "Golden Seal", Crafting).hard_index(77),
    ItemDesc::new( 534, "Demon Face Stone", Crafting).hard_index(78),
    ItemDesc::new( 535, "Torn Sleeve Surcoat", Crafting).hard_index(79),
    ItemDesc::new( 536, "Great Serpent Skin", Crafting).hard_index(80),
    ItemDesc::new( 537, "Phoenix Feather", Crafting).hard_index(81),
    ItemDesc::new( 538, "Provincial Dojo Certificate", Crafting).hard_index(82),
    ItemDesc::new( 539, "Snakeskin Eyepatch", Crafting).hard_index(83),
    ItemDesc::new( 540, "Primeval Spirit Stone", Crafting).hard_index(84),
    ItemDesc::new( 541, "Crimson Bead", Crafting).hard_index(85),
    ItemDesc::new( 542, "Baiken's Chain", Crafting).hard_index(86),
    ItemDesc::new( 543, "Shishido's Sickle", Crafting).hard_index(87),
    ItemDesc::new( 544, "Swordmaster's Oar", Crafting).hard_index(88),
    ItemDesc::new( 545, "Golden Medicine Case", Crafting).hard_index(89),
    ItemDesc::new( 546, "Tattered Surcoat", Crafting).hard_index(90),
    ItemDesc::new( 547, "Dragon Tear", Crafting).hard_index(91),
    ItemDesc::new( 548, "Eye of the Dragon", Crafting).hard_index(92),
    ItemDesc::new( 549, "Godslayer Charm", Crafting).hard_index(93),
    ItemDesc::new( 550, "Dragon Whisker", Crafting).hard_index(94),
    ItemDesc::new( 551, "Dragon Fang", Crafting).hard_index(95),
    ItemDesc::new( 552, "Medieval Silver Coin", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 553, "Tin Toy", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 554, "Medieval Gold Goin", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 555, "Insect Fossil", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 556, "Crystal Ball", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 557, "Buddhist Statue", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 558, "Dinosaur Fossil", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 559, "Clay Figurine", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 560, "Medieval Painting", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 561, "Marble Sphere", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 562, "Meteor Fragment", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 563, "Primeval Sword", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 564, "UFO Part", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 565, "Silver Chalice", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 566, "Visionary Painting", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 567, "Crystal Skull", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 568, "Golden Buddhist Statue", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 569, "Huge Rough Diamond", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 570, "Orichalcum", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 571, "Golden Dragon Statue", Item).max_in_inv(999).max_in_box(999),
    ItemDesc::new( 585, "Bumper Plate", PocketCircuit).hard_index(34),
    ItemDesc::new( 591, "Power Motor", PocketCircuit).hard_index(35),
    ItemDesc::new( 592, "Power Motor Plus", PocketCircuit).hard_index(36),
    ItemDesc::new( 593, "Extra Power Motor", PocketCircuit).hard_index(37),
    ItemDesc::new( 594, "Super Power Motor", PocketCircuit).hard_index(38),
    ItemDesc::new( 595, "Ultra Power Motor", PocketCircuit).hard_index(39),
    ItemDesc::new( 596, "Speed Motor", PocketCircuit).hard_index(40),
    ItemDesc::new( 597, "Speed Motor Plus", PocketCircuit).hard_index(41),
    ItemDesc::new( 598, "Extra Speed Motor", PocketCircuit).hard_index(42),
    ItemDesc::new( 599, "Super Speed Motor", PocketCircuit).hard_index(43),
    ItemDesc::new( 600, "Ultra Speed Motor", PocketCircuit).hard_index(44),
    ItemDesc::new( 601, "Balanced Motor", PocketCircuit).hard_index(45),
    ItemDesc::new( 602, "Balanced Motor Plus", PocketCircuit).hard_index(46),
    ItemDesc::new( 603, "Extra Balanced Motor", PocketCircuit).hard_index(47),
    ItemDesc::new( 604, "Super Balanced Motor", PocketCircuit).hard_index(48),
    ItemDesc::new( 605, "Ultra Balanced Motor", PocketCircuit).hard_index(49),
    ItemDesc::new( 606, "High Torque Motor", PocketCircuit).hard_index(50),
    ItemDesc::new( 607, "High Torque Motor 2.0", PocketCircuit).hard_index(51),
    ItemDesc::new( 608, "Godspeed Motor", PocketCircuit).hard_index(52),
    ItemDesc::new( 609, "Godspeed Motor Mark II", PocketCircuit).hard_index(53),
    ItemDesc::new( 610, "Slick Tires", PocketCircuit).hard_index(54),
    ItemDesc::new( 611, "Slick Tires Plus", PocketCircuit).hard_index(55),
    ItemDesc::new( 612, "Extra Slick Tires", PocketCircuit).hard_index(56),
    ItemDesc::new( 613, "Super Slick Tires", PocketCircuit).hard_index(57),
    ItemDesc::new( 614, "Ultra Slick Tires", PocketCircuit).hard_index(58),
    ItemDesc::new( 615, "Soft Tires", PocketCircuit).hard_index(59),
    ItemDesc::new( 616, "Soft Tires Plus", PocketCircuit).hard_index(60),
    ItemDesc::new( 617, "Extra Soft Tires", PocketCircuit).hard_index(61),
    ItemDesc::new( 618, "Super Soft Tires", PocketCircuit).hard_index(62),
    ItemDesc::new( 619, "Ultra Soft Tires", PocketCircuit).hard_index(63),
    ItemDesc::new( 620, "Spiked Tires", PocketCircuit).hard_index(64),
    ItemDesc::new( 621, "Spiked Tires Plus", PocketCircuit).hard_index(65),
    ItemDesc::new( 622, "Extra Spiked Tires", PocketCircuit).hard_index(66),
    ItemDesc::new( 623, "Super Spiked Tires", PocketCircuit).hard_index(67),
    ItemDesc::new( 624, "Ultra Spiked Tires", PocketCircuit).hard_index(68),
    ItemDesc::new( 625, "Low Profile Tires", PocketCircuit).hard_index(69),
    ItemDesc::new( 626, "Low Profile Tires Plus", PocketCircuit).hard_index(70),
    ItemDesc::new( 627, "Extra Low Profile Tires", PocketCircuit).hard_index(71),
    ItemDesc::new( 628, "Super Low Profile Tires", PocketCircuit).hard_index(72),
    ItemDesc::new( 629, "Ultra Low Profile Tires", PocketCircuit).hard_index(73),
    ItemDesc::new( 630, "Slim Tires", PocketCircuit).hard_index(74),
    ItemDesc::new( 631, "Slim Tires Plus", PocketCircuit).hard_index(75),
    ItemDesc::new( 632, "Extra Slim Tires", PocketCircuit).hard_index(76),
    ItemDesc::new( 633, "Super Slim Tires", PocketCircuit).hard_index(77),
    ItemDesc::new( 634, "Ultra Slim Tires", PocketCircuit).hard_index(78),
    ItemDesc::new( 635, "Power Gears", PocketCircuit).hard_index(79),
    ItemDesc::new( 636, "Power Gears Plus", PocketCircuit).hard_index(80),
    ItemDesc::new( 637, "Extra Power Gears", PocketCircuit).hard_index(81),
    ItemDesc::new( 638, "Super Power Gears", PocketCircuit).hard_index(82),
    ItemDesc::new( 639, "Ultra Power Gears", PocketCircuit).hard_index(83),
    ItemDesc::new( 640, "Balanced Gears", PocketCircuit).hard_index(84),
    ItemDesc::new( 641, "Balanced Gears Plus", PocketCircuit).hard_index(85),
    ItemDesc::new( 642, "Extra Balanced Gears", PocketCircuit).hard_index(86),
    ItemDesc::new( 643, "Super Balanced Gears", PocketCircuit).hard_index(87),
    ItemDesc::new( 644, "Ultra Balanced Gears", PocketCircuit).hard_index(88),
    ItemDesc::new( 645, "Regular Gears", PocketCircuit).hard_index(89),
    ItemDesc::new( 646, "Regular Gears Plus", PocketCircuit).hard_index(90),
    ItemDesc::new( 647, "Extra Regular Gears", PocketCircuit).hard_index(91),
    ItemDesc::new( 648, "Super Regular Gears", PocketCircuit).hard_index(92),
    ItemDesc::new( 649, "Ultra Regular Gears", PocketCircuit).hard_index(93),
    ItemDesc::new( 650, "Boost Gears", PocketCircuit).hard_index(94),
    ItemDesc::new( 651, "Boost Gears Plus", PocketCircuit).hard_index(95),
    ItemDesc::new( 652, "Extra Boost Gears", PocketCircuit).hard_index(96),
    ItemDesc::new( 653, "Super Boost Gears", PocketCircuit).hard_index(97),
    ItemDesc::new( 654, "Ultra Boost Gears", PocketCircuit).hard_index(98),
    ItemDesc::new( 660, "Bait", Item),
    ItemDesc::new( 661, "Quality Bait", Item),
    ItemDesc::new( 662, "Special Bait", Item),
    ItemDesc::new( 663, "Top-Grade Bait", Item),
    ItemDesc::new( 664, "Stone of Enduring", Gear),
    ItemDesc::new( 665, "Pager", Valuable).hard_index(1),
    ItemDesc::new( 666, "Telephone Card Album", Valuable).hard_index(2),
    ItemDesc::new( 667, "Demonfire Dagger", Weapon).strikes(0),
    ItemDesc::new( 668, "Yamazaki 18 Years Old", Menu),
    ItemDesc::new( 669, "Suntory Old Whisky", Menu),
    ItemDesc::new( 670, "The Macallan 12 Years Old", Menu),
    ItemDesc::new( 671, "Glenfiddich 12 Years Old", Menu),
    ItemDesc::new( 672, "Bowmore 12 Years Old", Menu),
    ItemDesc::new( 673, "Ballantine's 12 Years Old", Menu),
    ItemDesc::new( 674, "Laphroaig 10 Years Old", Menu),
    ItemDesc::new( 675, "Malt's the Draft (menu at bars)", Menu),
    ItemDesc::new( 676, "Suntory Brandy V.S.O.P", Menu),
    ItemDesc::new( 677, "Pummeling Bat", Weapon).strikes(0),
    ItemDesc::new( 678, "Golden Shotgun", Weapon).ammo(99),
    ItemDesc::new( 679, "Quick-Change Clothes", Gear),
    ItemDesc::new( 680, "Diamond Plate", Item).max_in_inv(99),
    ItemDesc::new( 681, "Incomparable Habu Drink", Item),
    ItemDesc::new( 682, "Black Bass", Item).max_in_inv(99),
    ItemDesc::new( 683, "Snakehead", Item).max_in_inv(99),
    ItemDesc::new( 684, "Silver Arowana", Item).max_in_inv(99),
    ItemDesc::new( 685, "Axolotl", Item).max_in_inv(99),
    ItemDesc::new( 686, "Coelacanth", Item).max_in_inv(99),
    ItemDesc::new( 698, "Grilled Rice Ball with Butter", Item),
    ItemDesc::new( 699, "Grilled Rice Ball with Miso", Item),
    ItemDesc::new( 700, "Tonkotsu Rice Ball", Item),
    ItemDesc::new( 701, "Sauce Rice Ball", Item),
    ItemDesc::new( 702, "Bento Lunch Set", Item),
    ItemDesc::new( 703, "Bento Lunch Set (Pork)", Item),
    ItemDesc::new( 704, "Zangi Lunch Set", Item),
    ItemDesc::new( 705, "Miso Cutlet Lunch Set", Item),
    ItemDesc::new( 706, "Okonomiyaki Lunch Set", Item),
    ItemDesc::new( 707, "Pan Fried Gyoza Lunch Set", Item),
    ItemDesc::new( 708, "Club Sandwich", Item),
    ItemDesc::new( 709, "Tuna & Egg Sandwich", Item),
    ItemDesc::new( 710, "Special Yakisoba", Item),
    ItemDesc::new( 711, "Steamed Bun", Item),
    ItemDesc::new( 712, "Bean Paste Bun", Item),
    ItemDesc::new( 719, "Milk", Item),
    ItemDesc::new( 721, "Sushi Set", Item),
    ItemDesc::new( 722, "Wormwood", Item),
    ItemDesc::new( 724, "Miso Paste Cucumber", Item),
    ItemDesc::new( 725, "Yakitori", Item),
    ItemDesc::new( 727, "Suntory Oolong Tea", Item),
    ItemDesc::new( 728, "Expired Lunch Set", Item),
    ItemDesc::new( 730, "French Cologne", Item),
    ItemDesc::new( 731, "French Perfume", Item),
    ItemDesc::new( 732, "Italian Cologne", Item),
    ItemDesc::new( 733, "Italian Perfume", Item),
    ItemDesc::new( 734, "French Scarf", Item),
    ItemDesc::new( 735, "French Wallet", Item),
    ItemDesc::new( 736, "Italian Scarf", Item),
    ItemDesc::new( 737, "Italian Wallet", Item),
    ItemDesc::new( 738, "French Handbag", Item),
    ItemDesc::new( 739, "Italian Shoulder Bag", Item),
    ItemDesc::new( 740, "Swiss Watch", Item),
    ItemDesc::new( 746, "Italian Woman's Watch", Item),
    ItemDesc::new( 747, "Italian Necklace", Item),
    ItemDesc::new( 749, "Italian Ring", Item),
    ItemDesc::new( 750, "Italian Men's Necklace", Item),
    ItemDesc::new( 751, "Gold Bracelet", Item),
    ItemDesc::new( 752, "Silver Bracelet", Item),
    ItemDesc::new( 757, "Italian Boots", Item),
    ItemDesc::new( 758, "French Sandals", Item),
    ItemDesc::new( 760, "British Woman's Coat", Item),
    ItemDesc::new( 762, "Leopard Print Coat", Item),
    ItemDesc::new( 765, "Leopard Print Mini Skirt", Item),
    ItemDesc::new( 767, "Handbag", Item),
    ItemDesc::new( 769, "Short Black Boots", Item),
    ItemDesc::new( 770, "Long Camel-Colored Boots", Item),
    ItemDesc::new( 772, "The Kaku Highball", Menu),
    ItemDesc::new( 773, "Yamazaki Highball", Menu),
    ItemDesc::new( 775, "Fresh Grapefruit Juice Highball", Menu),
    ItemDesc::new( 777, "Oolong Tea (Gindaco Highball Sakaba)", Menu),
    ItemDesc::new( 778, "Absolutely Tasty!! Takoyaki", Menu),
    ItemDesc::new( 779, "Cheese and Spicy Fish Roe", Menu),
    ItemDesc::new( 780, "Welsh Onion Takoyaki", Menu),
    ItemDesc::new( 783, "Avocado and Yuzu Pepper", Menu),
    ItemDesc::new( 784, "Sauce Yakisoba", Menu),
    ItemDesc::new( 785, "Smile Burger Set", Item),
    ItemDesc::new( 786, "Smile Cheeseburger Set", Item),
    ItemDesc::new( 787, "Teriyaki Smile Burger Set", Item),
    ItemDesc::new( 788, "King Smile Burger Set", Item),
    ItemDesc::new( 789, "Tuna Burger Set", Item),
    ItemDesc::new( 790, "Stewed Burger Set", Item),
    ItemDesc::new( 791, "Smile Shake", Item),
    ItemDesc::new( 793, "Smile Burger Set (dine in)", Menu),
    ItemDesc::new( 794, "Smile Cheeseburger Set (dine in)", Menu),
    ItemDesc::new( 795, "Teriyaki Smile Burger Set (dine in)", Menu),
    ItemDesc::new( 796, "King Smile Burger Set (dine in)", Menu),
    ItemDesc::new( 797, "Tuna Burger Set (dine in)", Menu),
    ItemDesc::new( 798, "Stewed Burger Set (dine in)", Menu),
    ItemDesc::new( 799, "Smile Shake (dine in)", Menu),
    ItemDesc::new( 803, "Chasu Ramen (Tengokuken)", Menu),
    ItemDesc::new( 807, "Salted Tongue", Menu),
    ItemDesc::new( 808, "Grade A Salted Tongue", Menu),
    ItemDesc::new( 809, "Kalbi", Menu),
    ItemDesc::new( 810, "Grade A Kalbi", Menu),
    ItemDesc::new( 811, "Sirloin", Menu),
    ItemDesc::new( 812, "Grade A Sirloin", Menu),
    ItemDesc::new( 813, "Harami", Menu),
    ItemDesc::new( 814, "Grade A Harami", Menu),
    ItemDesc::new( 815, "Tripe BBQ", Menu),
    ItemDesc::new( 816, "Seafood Platter", Menu),
    ItemDesc::new( 817, "Kimchi Combo", Menu),
    ItemDesc::new( 818, "Stone Cooked Bibimbap", Menu),
    ItemDesc::new( 819, "Spicy Beef Soup", Menu),
    ItemDesc::new( 820, "Grilled Garlic", Menu),
    ItemDesc::new( 821, "Tamago", Menu),
    ItemDesc::new( 822, "Maguro", Menu),
    ItemDesc::new( 823, "Ama-Ebi", Menu),
    ItemDesc::new( 824, "Engawa", Menu),
    ItemDesc::new( 825, "Seki Mackerel", Menu),
    ItemDesc::new( 826, "Namatako", Menu),
    ItemDesc::new( 827, "Hirame", Menu),
    ItemDesc::new( 828, "Shima-Aji", Menu),
    ItemDesc::new( 829, "Kinmedai", Menu),
    ItemDesc::new( 830, "Ikura", Menu),
    ItemDesc::new( 831, "Akagai", Menu),
    ItemDesc::new( 832, "Otoro", Menu),
    ItemDesc::new( 833, "Awabi", Menu),
    ItemDesc::new( 834, "Uni", Menu),
    ItemDesc::new( 862, "Pork Okonomiyaki", Menu),
    ItemDesc::new( 863, "Shrimp Okonomiyaki", Menu),
    ItemDesc::new( 864, "Shrimp & Squid Okonomiyaki", Menu),
    ItemDesc::new( 865, "Beef & Welsh Onion Okonomiyaki", Menu),
    ItemDesc::new( 866, "Potato, Mochi & Cheese Okonomiyaki", Menu),
    ItemDesc::new( 867, "Pork Kimchi Okonomiyaki", Menu),
    ItemDesc::new( 868, "Fugetsu-yaki", Menu),
    ItemDesc::new( 869, "Pork Modanyaki", Menu),
    ItemDesc::new( 870, "Shrimp Modanyaki", Menu),
    ItemDesc::new( 871, "Fugetsu-yaki (Modan)", Menu),
    ItemDesc::new( 872, "Tonpei-yaki", Menu),
    ItemDesc::new( 873, "Yakisoba (Tsuruhashi Fugetsu)", Menu),
    ItemDesc::new( 874, "Tecchiri Nabe", Menu),
    ItemDesc::new( 875, "Deluxe Tecchiri Nabe", Menu),
    ItemDesc::new( 876, "Tessa", Menu),
    ItemDesc::new( 877, "Fugu Tempura", Menu),
    ItemDesc::new( 878, "Deep Fried Fugu", Menu),
    ItemDesc::new( 883, "Torafugu \"Benten\" Course", Menu),
    ItemDesc::new( 884, "Torafugu \"Daikoku\" Course", Menu),
    ItemDesc::new( 885, "Torafugu \"Ebisu\" Course", Menu),
    ItemDesc::new( 886, "Torafugu \"Hotei\" Course", Menu),
    ItemDesc::new( 887, "Ramen", Menu),
    ItemDesc::new( 888, "Chasu Ramen (Kinryu Ramen)", Menu),
    ItemDesc::new( 889, "Soup of the Day", Menu),
    ItemDesc::new( 890, "Sashimi Platter", Menu),
    ItemDesc::new( 891, "\"Hokkori\" Kaiseki", Menu),
    ItemDesc::new( 892, "\"Hannari\" Kaiseki", Menu),
    ItemDesc::new( 893, "Snow Crab Course", Menu),
    ItemDesc::new( 894, "Matsutake Set", Menu),
    ItemDesc::new( 895, "Grilled Marbled Waygu", Menu),
    ItemDesc::new( 896, "Original Fried Pork Skewers", Menu),
    ItemDesc::new( 897, "Quail Eggs", Menu),
    ItemDesc::new( 898, "Squid Tentacles", Menu),
    ItemDesc::new( 899, "Asparagus", Menu),
    ItemDesc::new( 900, "Onion", Menu),
    ItemDesc::new( 901, "Bamboo Shoot", Menu),
    ItemDesc::new( 902, "Octopus (Kushikatsu Daruma)", Menu),
    ItemDesc::new( 903, "Whiting", Menu),
    ItemDesc::new( 904, "Lotus Root", Menu),
    ItemDesc::new( 905, "White Welsh Onion", Menu),
    ItemDesc::new( 906, "Tsukune", Menu),
    ItemDesc::new( 907, "Hearty Pumpkin", Menu),
    ItemDesc::new( 908, "Garlic Chicken", Menu),
    ItemDesc::new( 909, "Wild Shrimp", Menu),
    ItemDesc::new( 910, "Scallop", Menu),
    ItemDesc::new( 914, "Sotenbori Set", Menu),
    ItemDesc::new( 915, "Hoganji Set", Menu),
    ItemDesc::new( 916, "Crab Nabe", Menu),
    ItemDesc::new( 917, "Crab Shabushabu", Menu),
    ItemDesc::new( 918, "Crab Amiyaki (2 Kinds)", Menu),
    ItemDesc::new( 919, "Raw Crab Sushi", Menu),
    ItemDesc::new( 920, "Red King Crab Sushi", Menu),
    ItemDesc::new( 921, "Crab Sushi Platter", Menu),
    ItemDesc::new( 922, "Crab Nabe \"Shiosai\" Course", Menu),
    ItemDesc::new( 923, "Crab Nabe \"Yuzuru\" Course", Menu),
    ItemDesc::new( 924, "Crab Nabe \"Maihime\" Course", Menu),
    ItemDesc::new( 925, "Crab Kaiseki \"Seifuu\" Course", Menu),
    ItemDesc::new( 926, "Crab Kaiseki \"Hakutsuyu\" Course", Menu),
    ItemDesc::new( 927, "Crab Kaiseki \"Shoto\"", Menu),
    ItemDesc::new( 928, "Crab Kaiseki \"Jusanya\"", Menu),
    ItemDesc::new( 929, "Fatty Tuna Tenmi Sushi", Menu),
    ItemDesc::new( 930, "Fatty Tuna Sushi", Menu),
    ItemDesc::new( 931, "Bluefin Tuna Sushi Platter", Menu),
    ItemDesc::new( 932, "Sushi Set (Ganko Sushi)", Menu),
    ItemDesc::new( 933, "Choice Sushi Set", Menu),
    ItemDesc::new( 934, "Sushi Feast", Menu),
    ItemDesc::new( 935, "Seasonal Sashimi & Sushi Feast", Menu),
    ItemDesc::new( 936, "Sushi Kaiseki Chitose Course \"Moon\"", Menu),
    ItemDesc::new( 937, "Kaiseki Nishiki Course", Menu),
    ItemDesc::new( 938, "Takoyaki 8 pcs.", Item),
    ItemDesc::new( 939, "Takoyaki 16 pcs.", Item),
    ItemDesc::new( 940, "Cheese Takoyaki 8 pcs.", Item),
    ItemDesc::new( 941, "High Capacity Battery", PocketCircuit).hard_index(104),
    ItemDesc::new( 942, "High Speed Battery", PocketCircuit).hard_index(105),
    ItemDesc::new( 944, "Regular Battery", PocketCircuit).hard_index(106),
    ItemDesc::new( 945, "Godspeed Gears", PocketCircuit).hard_index(99),
    ItemDesc::new( 946, "Godspeed Gears Plus", PocketCircuit).hard_index(100),
    ItemDesc::new( 947, "Extra Godspeed Gears", PocketCircuit).hard_index(101),
    ItemDesc::new( 948, "Super Godspeed Gears", PocketCircuit).hard_index(102),
    ItemDesc::new( 949, "Ultra Godspeed Gears", PocketCircuit).hard_index(103),
    ItemDesc::new( 950, "Beef Bowl (Standard)", Menu),
    ItemDesc::new( 951, "Beef Bowl (Large)", Menu),
    ItemDesc::new( 952, "Beef Bowl (Extra Large)", Menu),
    ItemDesc::new( 953, "Ruby Plate", Item).max_in_inv(99),
    ItemDesc::new( 954, "Paper Plate", Item).max_in_inv(99),
    ItemDesc::new( 955, "Battery", Item),
    ItemDesc::new( 956, "Heart Necklace", Valuable),
    ItemDesc::new( 957, "The Videotape", Valuable),
    ItemDesc::new( 958, "Isobe Fan", Valuable).hard_index(12),
    ItemDesc::new( 959, "Matsutake", Item),
    ItemDesc::new( 960, "Maitake", Item),
    ItemDesc::new( 961, "Eringinoko", Item),
    ItemDesc::new( 962, "Enokitake", Item),
    ItemDesc::new( 963, "Shiitake", Item),
    ItemDesc::new( 964, "Chestnut the Squirrel (Blue)", Item),
    ItemDesc::new( 965, "Bunchan the Java Sparrow (White)", Item),
    ItemDesc::new( 966, "Chestnut the Squirrel (Red)", Item),
    ItemDesc::new( 967, "Bunchan the Java Sparrow (Pink)", Item),
    ItemDesc::new( 968, "Jumbo Chestnut", Item),
    ItemDesc::new( 969, "Jumbo Bunchan", Item),
    ItemDesc::new( 970, "Opa-Opa Figure", Item),
    ItemDesc::new( 971, "Woo Papa", Item),
    ItemDesc::new( 972, "Woo Mama", Item),
    ItemDesc::new( 973, "Woo-kun", Item),
    ItemDesc::new( 974, "Frill-necked Lizard", Item),
    ItemDesc::new( 975, "Kyon-bo", Item),
    ItemDesc::new( 976, "Kyon-chan", Item),
    ItemDesc::new( 977, "Kara Kappa", Item),
    ItemDesc::new( 978, "Mega Drive Stuffed Toy", Item),
    ItemDesc::new( 979, "Absorbent Sheet", Valuable),
    ItemDesc::new( 980, "Sneakers", Item),
    ItemDesc::new( 981, "Fan's Business Card", Valuable),
    ItemDesc::new( 982, "Dragon of Dojima Pack", Junk).max_in_inv(99),
    ItemDesc::new( 983, "Sotenbori Fun Pack", Junk).max_in_inv(99),
    ItemDesc::new( 984, "Kamurocho Fun Pack", Junk).max_in_inv(99),
    ItemDesc::new( 985, "Mad Dog of Shimano Pack", Junk).max_in_inv(99),
    ItemDesc::new( 986, "Pocket Circuit Starter Pack", Junk).max_in_inv(99),
    ItemDesc::new( 987, "Crafting Support Pack", Junk).max_in_inv(99),
    ItemDesc::new( 988, "Kamurocho Fun Pack 2", Junk).max_in_inv(99),
    ItemDesc::new( 989, "Sotenbori Fun Pack 2", Junk).max_in_inv(99),
    ItemDesc::new( 990, "Pocket Circuit Expert Pack", Junk).max_in_inv(99),
    ItemDesc::new( 991, "Super Rare Crafting Pack", Junk).max_in_inv(99),
    ItemDesc::new( 992, "Balanced Frame", PocketCircuit).hard_index(9),
    ItemDesc::new( 993, "Side Stabilizer", PocketCircuit).hard_index(107),
    ItemDesc::new( 994, "Side Stabilizer 2.0", PocketCircuit).hard_index(108),
    ItemDesc::new( 995, "Side Stabilizer 3.0", PocketCircuit).hard_index(109),
    ItemDesc::new( 999, "Light Suspension", PocketCircuit).hard_index(110),
    ItemDesc::new(1000, "Medium Suspension", PocketCircuit).hard_index(111),
    ItemDesc::new(1001, "Heavy Suspension", PocketCircuit).hard_index(112),
    ItemDesc::new(1002, "Legendary Drinker of Ryukyu", Item),
    ItemDesc::new(1003, "Repair Kit", Item),
    ItemDesc::new(1004, "Courvoisier XO", Menu),
    ItemDesc::new(1005, "Cold Takoyaki", Valuable),
    ItemDesc::new(1006, "Malt's", Item),
    ItemDesc::new(1007, "Kakubin", Item),
    ItemDesc::new(1008, "Carlsberg", Item),
    ItemDesc::new(1009, "Gold Champagne", Item),
    ItemDesc::new(1010, "Barley Shochu", Item),
    ItemDesc::new(1011, "Chestnut Shochu", Item),
    ItemDesc::new(1014, "Malt's the Draft (Gindaco Highball Sakaba)", Menu),
    ItemDesc::new(1015, "Teriyaki and Egg", Menu),
    ItemDesc::new(1016, "Fugu Cassolette Meal", Menu),
    ItemDesc::new(1017, "Fugu Set", Menu),
    ItemDesc::new(1018, "Grilled Fugu Set", Menu),
    ItemDesc::new(1019, "Fugu Three-Ways Set", Menu),
    ItemDesc::new(1020, "Sushi Kaiseki Chitose Course \"Snow\"", Menu),
    ItemDesc::new(1021, "Soba in Hot Broth", Menu),
    ItemDesc::new(1022, "Chilled Soba", Menu),
    ItemDesc::new(1023, "Chilled Tanuki Soba", Menu),
    ItemDesc::new(1024, "Chilled Kitsune Soba", Menu),
    ItemDesc::new(1025, "Egg & Tempura Soba", Menu),
    ItemDesc::new(1026, "Special Fuji Soba", Menu),
    ItemDesc::new(1027, "Yuzu Chicken & Spinach Soba", Menu),
    ItemDesc::new(1028, "Fried Pork Cutlet Bowl", Menu),
    ItemDesc::new(1029, "Curry & Rice", Menu),
    ItemDesc::new(1030, "Pickled Ginger Soba", Menu),
    ItemDesc::new(1031, "Draft Beer (Yoronotaki)", Menu),
    ItemDesc::new(1032, "Oolong Tea (Yoronotaki)", Menu),
    ItemDesc::new(1033, "Lemon Sour", Menu),
    ItemDesc::new(1034, "Grape Sour", Menu),
    ItemDesc::new(1035, "Fresh Grapefruit Sour", Menu),
    ItemDesc::new(1036, "Bakuhai", Menu),
    ItemDesc::new(1037, "Yoro Shochu Highball", Menu),
    ItemDesc::new(1038, "Gyokuru Green Tea Cocktail", Menu),
    ItemDesc::new(1039, "Kaku Highball", Menu),
    ItemDesc::new(1040, "Umeshu on the Rocks", Menu),
    ItemDesc::new(1041, "Cassis Oolong", Menu),
    ItemDesc::new(1042, "Mojito", Menu),
    ItemDesc::new(1043, "Yamazaki", Menu),
    ItemDesc::new(1044, "Value Sashimi Platter 7 pcs.", Menu),
    ItemDesc::new(1045, "Sashimi Platter 3 pcs.", Menu),
    ItemDesc::new(1046, "Seared Vinegar Mackerel", Menu),
    ItemDesc::new(1047, "Kotchori Salad", Menu),
    ItemDesc::new(1048, "Edamame (Yoronotaki)", Menu),
    ItemDesc::new(1049, "Skewer Platter", Menu),
    ItemDesc::new(1050, "Japanese Chicken Skewer", Menu),
    ItemDesc::new(1051, "Smelt Fish with Roe", Menu),
    ItemDesc::new(1052, "Fried Squid with Nori", Menu),
    ItemDesc::new(1053, "Salted Yakisoba", Menu),
    ItemDesc::new(1054, "Juicy Mince Cutlet", Menu),
    ItemDesc::new(1055, "Stir-Fried Bean Sprouts", Menu),
    ItemDesc::new(1056, "Mango & Peach Sherbert", Menu),
    ItemDesc::new(1057, "High Payout Token", Junk).max_in_box(1),
    ItemDesc::new(1058, "High Win Rate Token", Junk).max_in_box(1),
    ItemDesc::new(1059, "Auto Token", Junk).max_in_box(1),
    ItemDesc::new(1060, "Nagasaki Champon", Menu),
    ItemDesc::new(1061, "Vegetable Champon", Menu),
    ItemDesc::new(1062, "Spicy Champon", Menu),
    ItemDesc::new(1063, "Light Champon", Menu),
    ItemDesc::new(1064, "Nagasaki Saraudon", Menu),
    ItemDesc::new(1065, "Vegetable Saraudon", Menu),
    ItemDesc::new(1066, "Thick Saraudon", Menu),
    ItemDesc::new(1067, "Light Saraudon", Menu),
    ItemDesc::new(1068, "Gyoza 5pcs.", Menu),
    ItemDesc::new(1069, "Deep Fried Chicken", Menu),
    ItemDesc::new(1070, "Nagasaki Salad", Menu),
    ItemDesc::new(1071, "Shoyu Ramen", Menu),
    ItemDesc::new(1072, "Negi Ramen", Menu),
    ItemDesc::new(1073, "Negi Chasu Ramen", Menu),
    ItemDesc::new(1074, "7 Up", Item),
    ItemDesc::new(1075, "Mountain Dew", Item),
    ItemDesc::new(1076, "Sakkuru Biscuits", Item),
    ItemDesc::new(1077, "Suntory Kuromaru Shochu", Menu),
    ItemDesc::new(1078, "Balanced Frame Plus", PocketCircuit).hard_index(10),
    ItemDesc::new(1079, "Extra Balanced Frame", PocketCircuit).hard_index(11),
    ItemDesc::new(1080, "Super Balanced Frame", PocketCircuit).hard_index(12),
    ItemDesc::new(1081, "Ultra Balanced Frame", PocketCircuit).hard_index(13),
    ItemDesc::new(1082, "Metal Frame", PocketCircuit).hard_index(14),
    ItemDesc::new(1083, "Metal Frame Plus", PocketCircuit).hard_index(15),
    ItemDesc::new(1084, "Extra Metal Frame", PocketCircuit).hard_index(16),
    ItemDesc::new(1085, "Super Metal Frame", PocketCircuit).hard_index(17),
    ItemDesc::new(1086, "Ultra Metal Frame", PocketCircuit).hard_index(18),
    ItemDesc::new(1087, "Rocket Frame", PocketCircuit).hard_index(19),
    ItemDesc::new(1088, "Rocket Frame Plus", PocketCircuit).hard_index(20),
    ItemDesc::new(1089, "Extra Rocket Frame", PocketCircuit).hard_index(21),
    ItemDesc::new(1090, "Super Rocket Frame", PocketCircuit).hard_index(22),
    ItemDesc::new(1091, "Ultra Rocket Frame", PocketCircuit).hard_index(23),
    ItemDesc::new(1092, "Rubber Frame", PocketCircuit).hard_index(24),
    ItemDesc::new(1093, "Rubber Frame Plus", PocketCircuit).hard_index(25),
    ItemDesc::new(1094, "Extra Rubber Frame", PocketCircuit).hard_index(26),
    ItemDesc::new(1095, "Super Rubber Frame", PocketCircuit).hard_index(27),
    ItemDesc::new(1096, "Ultra Rubber Frame", PocketCircuit).hard_index(28),
    ItemDesc::new(1097, "Speed Frame", PocketCircuit).hard_index(29),
    ItemDesc::new(1098, "Speed Frame Plus", PocketCircuit).hard_index(30),
    ItemDesc::new(1099, "Extra Speed Frame", PocketCircuit).hard_index(31),
    ItemDesc::new(1100, "Super Speed Frame", PocketCircuit).hard_index(32),
    ItemDesc::new(1101, "Ultra Speed Frame", PocketCircuit).hard_index(33),
    ItemDesc::new(1102, "Vanilla Ice Cream", Item),
    ItemDesc::new(1103, "Chocolate Ice Cream", Item),
    ItemDesc::new(1104, "Mint Ice Cream", Item),
    ItemDesc::new(1105, "Handmade Amulet", Valuable),
    ItemDesc::new(1106, "Tonkotsu Ramen", Item),
    ItemDesc::new(1107, "Shrink-wrapped Magazine", Item),
    ItemDesc::new(1108, "Candy", Item),
    ItemDesc::new(1109, "Tatsu Brand Drink", Item),
    ItemDesc::new(1110, "Ultra Tatsu Brand Drink", Item),
    ItemDesc::new(1111, "Wine", Menu),
    ItemDesc::new(1112, "Draft Beer (Maharaja)", Menu),
    ItemDesc::new(1113, "Champagne (Maharaja)", Menu),
    ItemDesc::new(1114, "Cassis & Orange", Menu),
    ItemDesc::new(1115, "Gin & Lime", Menu),
    ItemDesc::new(1117, "Omelet", Menu),
    ItemDesc::new(1118, "Edamame (Karaoke bars)", Menu),
    ItemDesc::new(1119, "Fried Chicken", Menu),
    ItemDesc::new(1120, "Pickles", Menu),
    ItemDesc::new(1121, "Yakisoba (Utahime Karaoke)", Menu),
    ItemDesc::new(1122, "Whisky", Menu),
    ItemDesc::new(1123, "Draft Beer (Karaoke bars)", Menu),
    ItemDesc::new(1124, "Oolong Tea (Karaoke bars)", Menu),
    ItemDesc::new(1125, "Red Blaze", PocketCircuit).hard_index(0),
    ItemDesc::new(1126, "Blue Bolt", PocketCircuit).hard_index(1),
    ItemDesc::new(1127, "Sunshine", PocketCircuit).hard_index(2),
    ItemDesc::new(1128, "Dark Purple", PocketCircuit).hard_index(3),
    ItemDesc::new(1129, "DRAGON", PocketCircuit).hard_index(4),
    ItemDesc::new(1130, "Golem Tiger", PocketCircuit).hard_index(5),
    ItemDesc::new(1131, "Cool Striker", PocketCircuit).hard_index(6),
    ItemDesc::new(1132, "Devil Killer", PocketCircuit).hard_index(7),
    ItemDesc::new(1133, "Killer Bee", PocketCircuit).hard_index(8),
    ItemDesc::new(1134, "Chasu Ramen", Item),
    ItemDesc::new(1135, "Kyogetsu Green", Menu),
    ItemDesc::new(1136, "Beefeater", Menu),
    ItemDesc::new(1137, "Kakubin (menu)", Menu),
    ItemDesc::new(1138, "Suntory Rum Gold", Menu),
    ItemDesc::new(1139, "Easy Starter", Valuable).hard_index(18),
    ItemDesc::new(1140, "River Classic", Valuable).hard_index(19),
    ItemDesc::new(1141, "Rivermaster", Valuable).hard_index(20),
    ItemDesc::new(1142, "Sea Classic", Valuable).hard_index(21),
    ItemDesc::new(1143, "Seamaster", Valuable).hard_index(22),
    ItemDesc::new(1144, "Peerless Pole", Valuable).hard_index(23),
    ItemDesc::new(1145, "Staminan Spork", Item),
    ItemDesc::new(1146, "Amon Pocket Tissues", Item),
    ItemDesc::new(1147, "Walkman", ValuableJunk),
];
