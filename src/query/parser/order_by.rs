//! orderBy 参数解析
//!
//! 语法: `field [asc|desc] [nulls first|last]`，token 之间以空白分隔

use log::debug;

use crate::core::error::ValidationError;
use crate::core::schema::FieldSchema;
use crate::core::types::{NullsPlacement, OrderClause, OrderDirection, ParamValue};

/// orderBy 参数名
pub const ORDER_BY_PARAM: &str = "orderBy";

/// 解析 orderBy 参数
///
/// token 数只能是 1、2 或 4；方向和 nulls 关键字大小写不敏感，但按原样输出
pub fn parse_order_by<S>(schema: &S, param: &ParamValue) -> Result<OrderClause, ValidationError>
where
    S: FieldSchema + ?Sized,
{
    let order_by = param.require_single(ORDER_BY_PARAM)?;
    let tokens: Vec<&str> = order_by.split_whitespace().collect();

    let (field, direction, nulls) = match tokens.as_slice() {
        [field] => (*field, None, None),
        [field, direction] => (*field, Some(*direction), None),
        [field, direction, keyword, placement] => {
            (*field, Some(*direction), Some((*keyword, *placement)))
        }
        _ => {
            return Err(ValidationError::invalid_order_by(order_by).with_context(ORDER_BY_PARAM));
        }
    };

    if !schema.has_field(field) {
        return Err(
            ValidationError::unknown_field(field, schema.entity_name())
                .with_context(ORDER_BY_PARAM),
        );
    }

    let mut clause = OrderClause::new(field);

    if let Some(token) = direction {
        let direction = OrderDirection::parse(token)
            .ok_or_else(|| ValidationError::unsupported_argument(token, ORDER_BY_PARAM))?;
        clause = clause.with_direction(direction, token);
    }

    if let Some((keyword, token)) = nulls {
        if !keyword.eq_ignore_ascii_case("nulls") {
            return Err(ValidationError::unsupported_argument(keyword, ORDER_BY_PARAM));
        }
        let placement = NullsPlacement::parse(token)
            .ok_or_else(|| ValidationError::unsupported_argument(token, ORDER_BY_PARAM))?;
        clause = clause.with_nulls(placement, keyword, token);
    }

    debug!("orderBy {:?} -> {}", order_by, clause);
    Ok(clause)
}
