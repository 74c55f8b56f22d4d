use crate::error::AssistError;
use crate::graph::Flowchart;
use crate::synth;

/// An external prompt-in/text-out completion service.
///
/// The engine only ever sends a fully-formed natural-language prompt and
/// expects freeform text back. Modeled as a capability so callers can wire
/// a live endpoint while tests use a deterministic stub.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, AssistError>;
}

/// Prompt asking the service to explain a generated program to a beginner.
pub fn explain_prompt(code: &str) -> String {
    format!(
        "Explique o seguinte código VisualG para um programador iniciante, \
         detalhando o que cada linha faz e qual o objetivo geral do algoritmo. \
         Seja claro e didático, usando formatação Markdown.\n\n---\n\n{}",
        code
    )
}

/// Prompt asking the service for a practice problem the program solves.
pub fn problem_prompt(code: &str) -> String {
    format!(
        "Crie um enunciado de problema simples do dia a dia que possa ser \
         resolvido pelo seguinte algoritmo em VisualG. O enunciado deve ser \
         claro, direto e usar formatação Markdown.\n\n---\n\n{}",
        code
    )
}

/// Asks the service to explain an already-synthesized program.
///
/// A failure is returned as-is; callers show the error text inline in place
/// of the expected content and must never treat it as content.
pub fn explain_code(service: &dyn TextGenerator, code: &str) -> Result<String, AssistError> {
    call(service, &explain_prompt(code))
}

/// Synthesizes the chart's program and asks the service for a matching
/// practice problem. Fails before calling out when the chart has no start
/// block.
pub fn propose_problem(
    service: &dyn TextGenerator,
    chart: &Flowchart,
) -> Result<String, AssistError> {
    let code = synth::synthesize(chart)?;
    call(service, &problem_prompt(&code))
}

fn call(service: &dyn TextGenerator, prompt: &str) -> Result<String, AssistError> {
    let result = service.generate(prompt);
    if let Err(err) = &result {
        log::warn!("text generation failed: {}", err);
    }
    result
}
