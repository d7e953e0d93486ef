//! Relation Tables
//!
//! Static lookup data indexed by enum discriminant. Rows and columns run in
//! cycle order (甲..癸 for stems, 子..亥 for branches).

use super::value_objects::Stem::{self, *};
use super::value_objects::TenGod::{self, *};

/// 十神: `TEN_GODS[reference][target]`
#[rustfmt::skip]
pub const TEN_GODS: [[TenGod; 10]; 10] = [
    // 甲
    [
        Peer, RobWealth, EatingGod, HurtingOfficer, IndirectWealth, DirectWealth,
        SevenKillings, DirectOfficer, IndirectResource, DirectResource,
    ],
    // 乙
    [
        RobWealth, Peer, HurtingOfficer, EatingGod, DirectWealth, IndirectWealth,
        DirectOfficer, SevenKillings, DirectResource, IndirectResource,
    ],
    // 丙
    [
        IndirectResource, DirectResource, Peer, RobWealth, EatingGod, HurtingOfficer,
        IndirectWealth, DirectWealth, SevenKillings, DirectOfficer,
    ],
    // 丁
    [
        DirectResource, IndirectResource, RobWealth, Peer, HurtingOfficer, EatingGod,
        DirectWealth, IndirectWealth, DirectOfficer, SevenKillings,
    ],
    // 戊
    [
        SevenKillings, DirectOfficer, IndirectResource, DirectResource, Peer, RobWealth,
        EatingGod, HurtingOfficer, IndirectWealth, DirectWealth,
    ],
    // 己
    [
        DirectOfficer, SevenKillings, DirectResource, IndirectResource, RobWealth, Peer,
        HurtingOfficer, EatingGod, DirectWealth, IndirectWealth,
    ],
    // 庚
    [
        IndirectWealth, DirectWealth, SevenKillings, DirectOfficer, IndirectResource,
        DirectResource, Peer, RobWealth, EatingGod, HurtingOfficer,
    ],
    // 辛
    [
        DirectWealth, IndirectWealth, DirectOfficer, SevenKillings, DirectResource,
        IndirectResource, RobWealth, Peer, HurtingOfficer, EatingGod,
    ],
    // 壬
    [
        EatingGod, HurtingOfficer, IndirectWealth, DirectWealth, SevenKillings,
        DirectOfficer, IndirectResource, DirectResource, Peer, RobWealth,
    ],
    // 癸
    [
        HurtingOfficer, EatingGod, DirectWealth, IndirectWealth, DirectOfficer,
        SevenKillings, DirectResource, IndirectResource, RobWealth, Peer,
    ],
];

/// 藏干: primary, secondary, tertiary hidden stems per branch
#[rustfmt::skip]
pub const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Gui],            // 子
    &[Ji, Gui, Xin],   // 丑
    &[Jia, Bing, Wu],  // 寅
    &[Yi],             // 卯
    &[Wu, Yi, Gui],    // 辰
    &[Bing, Wu, Geng], // 巳
    &[Ding, Ji],       // 午
    &[Ji, Ding, Yi],   // 未
    &[Geng, Ren, Wu],  // 申
    &[Xin],            // 酉
    &[Wu, Xin, Ding],  // 戌
    &[Ren, Jia],       // 亥
];

/// 四化: star names receiving 禄 权 科 忌 for each stem
pub const SIHUA: [[&str; 4]; 10] = [
    ["廉贞", "破军", "武曲", "太阳"], // 甲
    ["天机", "天梁", "紫微", "太阴"], // 乙
    ["天同", "天机", "文昌", "廉贞"], // 丙
    ["太阴", "天同", "天机", "巨门"], // 丁
    ["贪狼", "太阴", "右弼", "天机"], // 戊
    ["武曲", "贪狼", "天梁", "文曲"], // 己
    ["太阳", "武曲", "太阴", "天同"], // 庚
    ["巨门", "太阳", "文曲", "文昌"], // 辛
    ["天梁", "紫微", "左辅", "武曲"], // 壬
    ["破军", "巨门", "太阴", "贪狼"], // 癸
];
