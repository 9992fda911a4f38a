use crate::builder::HandlerFunction;
use crate::utils::escape_js_string;

use super::Render;

impl Render for HandlerFunction {
    fn render(&self) -> String {
        format!(
            "export const {name} = rest.{method}(\"{url}\", function handler(req, res, ctx) {{\n  return res(ctx.json({factory}()));\n}});\n",
            name = self.name,
            method = self.method.as_lower(),
            url = escape_js_string(&self.url),
            factory = self.factory,
        )
    }
}
