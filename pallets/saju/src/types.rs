//! # 사주 Pallet 类型定义
//!
//! 核心索引类型（천간/지지/간지）、五行类型、输入输出结构。
//!
//! 设计约定：链上只存储紧凑的索引数据（`SajuChartRecord`），
//! 所有展示字段（한글/한자/띠동물等）由索引实时派生，不上链。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::vec::Vec;

use crate::constants;

// ============================================================================
// 五行（오행）
// ============================================================================

/// 五行（오행）
///
/// 枚举顺序即规范顺序：목(木) → 화(火) → 토(土) → 금(金) → 수(水)。
/// 强弱判定在计数相同时按此顺序决定平局（见 [`crate::interpretation::classify`]），
/// 因此变体顺序不可调整。
#[derive(
	Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo,
	MaxEncodedLen, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Ohaeng {
	/// 목（木）
	Mok,
	/// 화（火）
	Hwa,
	/// 토（土）
	To,
	/// 금（金）
	Geum,
	/// 수（水）
	Su,
}

impl Ohaeng {
	/// 规范顺序的全部五行
	pub const ALL: [Ohaeng; 5] = [Ohaeng::Mok, Ohaeng::Hwa, Ohaeng::To, Ohaeng::Geum, Ohaeng::Su];

	/// 规范顺序中的下标（0-4）
	pub const fn index(self) -> usize {
		self as usize
	}

	/// 显示名（한글）
	pub fn name(self) -> &'static str {
		constants::OHAENG_INFO[self.index()].name
	}

	/// 한자 표기
	pub fn hanja(self) -> &'static str {
		constants::OHAENG_INFO[self.index()].hanja
	}

	/// 展示用颜色（十六进制）
	pub fn color(self) -> &'static str {
		constants::OHAENG_INFO[self.index()].color
	}

	/// 含义短语
	pub fn meaning(self) -> &'static str {
		constants::OHAENG_INFO[self.index()].meaning
	}

	/// 方位
	pub fn direction(self) -> &'static str {
		constants::OHAENG_INFO[self.index()].direction
	}

	/// 季节
	pub fn season(self) -> &'static str {
		constants::OHAENG_INFO[self.index()].season
	}
}

// ============================================================================
// 천간 / 지지 / 간지
// ============================================================================

/// 천간（天干）索引，0-9 对应 갑 을 병 정 무 기 경 신 임 계
#[derive(
	Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo,
	MaxEncodedLen, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cheongan(pub u8);

impl Cheongan {
	/// 从索引构造，索引必须在 0-9 范围内
	pub fn from_index(index: u8) -> Option<Self> {
		if index < 10 { Some(Cheongan(index)) } else { None }
	}

	/// 한글 표기
	pub fn hangul(self) -> &'static str {
		constants::CHEONGAN_HANGUL[self.0 as usize]
	}

	/// 한자 표기
	pub fn hanja(self) -> &'static str {
		constants::CHEONGAN_HANJA[self.0 as usize]
	}

	/// 所属五行
	pub fn ohaeng(self) -> Ohaeng {
		constants::CHEONGAN_OHAENG[self.0 as usize]
	}
}

/// 지지（地支）索引，0-11 对应 자 축 인 묘 진 사 오 미 신 유 술 해
#[derive(
	Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo,
	MaxEncodedLen, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Jiji(pub u8);

impl Jiji {
	/// 从索引构造，索引必须在 0-11 范围内
	pub fn from_index(index: u8) -> Option<Self> {
		if index < 12 { Some(Jiji(index)) } else { None }
	}

	/// 한글 표기
	pub fn hangul(self) -> &'static str {
		constants::JIJI_HANGUL[self.0 as usize]
	}

	/// 한자 표기
	pub fn hanja(self) -> &'static str {
		constants::JIJI_HANJA[self.0 as usize]
	}

	/// 所属五行
	pub fn ohaeng(self) -> Ohaeng {
		constants::JIJI_OHAENG[self.0 as usize]
	}

	/// 띠동물（생초）이름
	pub fn animal(self) -> &'static str {
		constants::JIJI_ANIMAL[self.0 as usize]
	}

	/// 띠동물 이모지
	pub fn animal_emoji(self) -> &'static str {
		constants::JIJI_ANIMAL_EMOJI[self.0 as usize]
	}
}

/// 간지（干支）对：一柱的天干 + 地支
#[derive(
	Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo,
	MaxEncodedLen, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ganji {
	/// 천간
	pub gan: Cheongan,
	/// 지지
	pub ji: Jiji,
}

/// 四柱（사주）：년주/월주/일주 + 可选的 시주
///
/// 出生时辰未知（hour_code = -1）时 `hour` 为 `None`，
/// 下游五行统计只累计三柱（6 次计数）。
#[derive(
	Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo,
	MaxEncodedLen, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SajuPillars {
	/// 년주（연주）
	pub year: Ganji,
	/// 월주
	pub month: Ganji,
	/// 일주
	pub day: Ganji,
	/// 시주（출생 시각을 모르면 None）
	pub hour: Option<Ganji>,
}

impl SajuPillars {
	/// 在场柱数（3 或 4）
	pub fn count(&self) -> u8 {
		if self.hour.is_some() { 4 } else { 3 }
	}

	/// 遍历在场的柱
	pub fn iter(&self) -> impl Iterator<Item = &Ganji> {
		[Some(&self.year), Some(&self.month), Some(&self.day), self.hour.as_ref()]
			.into_iter()
			.flatten()
	}
}

// ============================================================================
// 出生信息
// ============================================================================

/// 性别（仅用于解读文案中的称谓替换，不影响排盘）
#[derive(
	Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo,
	MaxEncodedLen, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
	/// 남성
	Male,
	/// 여성
	Female,
}

/// 出生信息（调用方原样回显）
///
/// `hour_code`：-1 表示出生时辰未知，0-11 表示从 23 时起算的
/// 十二时辰（0 = 자시 23:00-01:00，1 = 축시 01:00-03:00，……）。
///
/// `is_lunar`：仅接受并回显。本模块不做음력→양력转换，
/// 调用方必须传入已经换算好的公历日期（已知的功能局限）。
#[derive(
	Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo,
	MaxEncodedLen, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthInfo {
	/// 公历年
	pub year: i32,
	/// 公历月（1-12）
	pub month: u8,
	/// 公历日（1-31；越界值按日期算术自然进位，不报错）
	pub day: u8,
	/// 时辰编码（-1 或 0-11）
	pub hour_code: i8,
	/// 输入是否为음력（只回显，不参与计算）
	pub is_lunar: bool,
	/// 性别
	pub gender: Gender,
}

// ============================================================================
// 五行分析
// ============================================================================

/// 五行计数分布，下标为 [`Ohaeng`] 的规范顺序
///
/// 不变量：计数总和 = 2 × 在场柱数（每柱贡献天干、地支各一次）。
#[derive(
	Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo,
	MaxEncodedLen, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OhaengTally {
	/// 목 화 토 금 수 顺序的计数
	pub counts: [u8; 5],
}

impl OhaengTally {
	/// 计数总和
	pub fn total(&self) -> u8 {
		self.counts.iter().sum()
	}

	/// 指定五行的计数
	pub fn count(&self, ohaeng: Ohaeng) -> u8 {
		self.counts[ohaeng.index()]
	}
}

/// 五行均衡等级
#[derive(
	Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo,
	MaxEncodedLen, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BalanceTier {
	/// 균형（max - min ≤ 2）
	Balanced,
	/// 약간 불균형（max - min ≤ 4）
	SlightlyImbalanced,
	/// 불균형（其余）
	Imbalanced,
}

/// 五行分析结果
#[derive(Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OhaengAnalysis {
	/// 计数分布
	pub tally: OhaengTally,
	/// 最旺五行（计数相同时取规范顺序靠前者）
	pub dominant: Ohaeng,
	/// 最弱五行（计数相同时取规范顺序靠后者）
	pub weak: Ohaeng,
	/// 均衡等级
	pub balance: BalanceTier,
	/// 说明文案（UTF-8）
	pub description: Vec<u8>,
}

// ============================================================================
// 解读与运势
// ============================================================================

/// 解读结果：일간 성격 조회 + 五段文案
///
/// 全部为模板替换拼接的 UTF-8 文本，无生成逻辑。
#[derive(Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpretation {
	/// 일간 명칭（예: 경금）
	pub day_stem_name: Vec<u8>,
	/// 일간 상징（예: 바위와 쇠）
	pub day_stem_symbol: Vec<u8>,
	/// 일간 성격 설명
	pub day_stem_personality: Vec<u8>,
	/// 일간 키워드（3개）
	pub day_stem_keywords: Vec<Vec<u8>>,
	/// 총운
	pub overall: Vec<u8>,
	/// 성격
	pub personality: Vec<u8>,
	/// 직업운
	pub career: Vec<u8>,
	/// 대인관계운
	pub relationship: Vec<u8>,
	/// 건강운
	pub health: Vec<u8>,
}

/// 年度运势条目（按일간 한글 字符索引的静态内容，原样透传）
#[derive(Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct YearlyFortune {
	/// 키워드 제목
	pub title: Vec<u8>,
	/// 한 줄 요약
	pub summary: Vec<u8>,
	/// 상세 설명
	pub description: Vec<u8>,
	/// 조언
	pub advice: Vec<u8>,
}

/// 月度运势条目（按公历月 1-12 索引的静态内容，原样透传）
#[derive(Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyFortune {
	/// 公历月（1-12）
	pub month: u8,
	/// 키워드
	pub keyword: Vec<u8>,
	/// 조언
	pub advice: Vec<u8>,
}

// ============================================================================
// 展示视图
// ============================================================================

/// 单柱展示视图：索引 + 派生的展示字段
///
/// 띠동물 字段只在년주上填充，与源展示层的约定一致。
#[derive(Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PillarView {
	/// 干支索引
	pub ganji: Ganji,
	/// 천간 한글
	pub stem_hangul: Vec<u8>,
	/// 천간 한자
	pub stem_hanja: Vec<u8>,
	/// 지지 한글
	pub branch_hangul: Vec<u8>,
	/// 지지 한자
	pub branch_hanja: Vec<u8>,
	/// 천간의 五行
	pub element: Ohaeng,
	/// 띠동물（년주 한정）
	pub animal: Option<Vec<u8>>,
	/// 띠동물 이모지（년주 한정）
	pub animal_emoji: Option<Vec<u8>>,
}

/// 四柱展示视图
#[derive(Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SajuPillarsView {
	/// 년주
	pub year: PillarView,
	/// 월주
	pub month: PillarView,
	/// 일주
	pub day: PillarView,
	/// 시주
	pub hour: Option<PillarView>,
}

/// 完整排盘结果
///
/// 每次调用新建，调用方独占所有权；本模块自身从不持久化该结构
/// （链上只存 [`SajuChartRecord`]，查询时重算）。
#[derive(Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SajuResult {
	/// 四柱
	pub pillars: SajuPillarsView,
	/// 五行分析
	pub elements: OhaengAnalysis,
	/// 五行百分比视图（목 화 토 금 수 顺序）
	///
	/// 每项独立四舍五入，总和可能偏离 100（最多 ±4），属文档化的
	/// 既有行为，不做修正。
	pub percentages: [u8; 5],
	/// 解读文案
	pub interpretation: Interpretation,
	/// 일간 기준 年度运势
	pub yearly_fortune: YearlyFortune,
	/// 回显的出生信息
	pub birth: BirthInfo,
}

// ============================================================================
// 链上存储结构
// ============================================================================

/// 命盘存储记录（紧凑结构）
///
/// 只保存出生输入与四柱索引缓存；五行分析、解读文案等
/// 派生数据一律查询时重算，不占用链上存储。
#[derive(
	Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo,
	MaxEncodedLen, RuntimeDebug,
)]
pub struct SajuChartRecord<AccountId, BlockNumber> {
	/// 所有者
	pub owner: AccountId,
	/// 出生信息
	pub birth: BirthInfo,
	/// 四柱索引缓存
	pub pillars: SajuPillars,
	/// 创建区块号
	pub created_at: BlockNumber,
}
