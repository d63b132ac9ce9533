//! # Saju Chart Runtime API
//!
//! 节点 RPC 层调用的免费查询接口声明。全部接口实时计算，
//! 不消耗 gas，不产生链上存储。

use sp_std::vec::Vec;

use crate::types::{Gender, MonthlyFortune, SajuResult};

sp_api::decl_runtime_apis! {
	/// 사주 排盘查询 API
	pub trait SajuChartApi {
		/// 按命盘ID实时计算完整排盘结果
		fn saju_result_of(chart_id: u64) -> Option<SajuResult>;

		/// 临时排盘（不存储）：出生信息 → 完整结果
		fn calculate_saju(
			year: i32,
			month: u8,
			day: u8,
			hour_code: i8,
			is_lunar: bool,
			gender: Gender,
		) -> SajuResult;

		/// 12개월 전체 月度운세
		fn monthly_fortunes() -> Vec<MonthlyFortune>;
	}
}
