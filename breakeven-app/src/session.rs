//! One open model and the view it feeds.

use std::io::ErrorKind;
use std::path::Path;

use breakeven_core::{
    AggregateFigures, BreakEvenCalculator, BusinessModel, EditCommand, FieldValue,
    PresentationSink, Publisher, Schema, apply_edit,
};
use breakeven_data::{CodecError, ImportReport, export_to_string, import_from_str};
use tracing::{debug, info, warn};

/// Owns the model and keeps `sink` in step with it.
///
/// Every method that changes the model recomputes all figures and publishes
/// them, together with the editable inputs, before it returns.
#[derive(Debug)]
pub struct Session<S: PresentationSink> {
    model: BusinessModel,
    schema: Schema,
    calculator: BreakEvenCalculator,
    publisher: Publisher,
    figures: AggregateFigures,
    sink: S,
}

impl<S: PresentationSink> Session<S> {
    /// Opens the built-in default model.
    pub fn new(
        calculator: BreakEvenCalculator,
        publisher: Publisher,
        sink: S,
    ) -> Self {
        Self::with_model(BusinessModel::default(), calculator, publisher, sink)
    }

    pub fn with_model(
        model: BusinessModel,
        calculator: BreakEvenCalculator,
        publisher: Publisher,
        sink: S,
    ) -> Self {
        let mut session = Self {
            model,
            schema: Schema::default_shape(),
            calculator,
            publisher,
            figures: AggregateFigures::default(),
            sink,
        };
        session.render();
        session
    }

    pub fn model(&self) -> &BusinessModel {
        &self.model
    }

    pub fn figures(&self) -> &AggregateFigures {
        &self.figures
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Recomputes every figure and republishes the whole view.
    pub fn render(&mut self) {
        self.figures = self.calculator.calculate(&self.model);
        self.publisher.render_inputs(&self.model, &mut self.sink);
        self.publisher.publish(&self.figures, &mut self.sink);
    }

    /// Applies one edit and refreshes the view.
    ///
    /// An edit aimed at a field that does not exist is logged and ignored;
    /// `None` is returned and the model is unchanged.
    pub fn apply_edit(
        &mut self,
        edit: &EditCommand,
    ) -> Option<FieldValue> {
        let stored = match apply_edit(&mut self.model, edit) {
            Ok(value) => {
                debug!(path = %edit.path, %value, "applied edit");
                Some(value)
            }
            Err(err) => {
                warn!(path = %edit.path, error = %err, "ignoring edit");
                None
            }
        };
        self.render();
        stored
    }

    /// Merges CSV text into the model and refreshes the view.
    pub fn import_str(
        &mut self,
        text: &str,
    ) -> ImportReport {
        let report = import_from_str(&mut self.model, &self.schema, text);
        self.render();
        report
    }

    /// Reads a CSV file and merges it into the model.
    ///
    /// The model is not touched until the whole file has been read. A missing
    /// file is not an error: nothing changes and `None` is returned.
    pub async fn import_file(
        &mut self,
        path: &Path,
    ) -> Result<Option<ImportReport>, CodecError> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "import file not found, nothing imported");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        info!(path = %path.display(), "importing model values");
        Ok(Some(self.import_str(&text)))
    }

    /// The current model as CSV text.
    pub fn export_csv(&self) -> String {
        export_to_string(&self.model)
    }

    pub async fn write_export(
        &self,
        path: &Path,
    ) -> Result<(), CodecError> {
        tokio::fs::write(path, self.export_csv()).await?;
        info!(path = %path.display(), "exported model values");
        Ok(())
    }
}
