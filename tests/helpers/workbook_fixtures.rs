//! Common workbook XML fixtures for tests.

/// A realistic workbook: one parameters datasource, one SQL Server
/// datasource with custom SQL, an orphan datasource and two worksheets.
pub const SUPERSTORE_TWB: &str = r#"<?xml version='1.0' encoding='utf-8' ?>
<workbook source-build='2023.1.0 (20231.23.0310.1045)' version='18.1' xmlns:user='http://www.tableausoftware.com/xml/user'>
  <datasources>
    <datasource hasconnection='false' inline='true' name='Parameters' version='18.1'>
      <aliases enabled='yes' />
      <column caption='Top N' datatype='integer' name='[Parameter 1]' param-domain-type='range' role='measure' type='quantitative' value='10'>
        <calculation class='tableau' formula='10' />
      </column>
      <column datatype='string' name='[Region Picker]' param-domain-type='list' role='dimension' type='nominal' value='&quot;West&quot;'>
        <calculation class='tableau' formula='&quot;West&quot;' />
      </column>
    </datasource>
    <datasource caption='Superstore' inline='true' name='federated.0a1b2c' version='18.1'>
      <connection class='federated'>
        <named-connections>
          <named-connection caption='db01' name='sqlserver.1xyz'>
            <connection authentication='sspi' class='sqlserver' dbname='Superstore' odbc-native-protocol='' server='db01' />
          </named-connection>
        </named-connections>
        <_.fcp.ObjectModelEncapsulateLegacy.false...relation connection='sqlserver.1xyz' name='Custom SQL Query' type='text'>SELECT o.* FROM Orders o WHERE o.Amount &gt; 0</_.fcp.ObjectModelEncapsulateLegacy.false...relation>
        <_.fcp.ObjectModelEncapsulateLegacy.true...relation connection='sqlserver.1xyz' name='Custom SQL Query' type='text'>
          SELECT o.* FROM Orders o WHERE o.Amount &gt; 0
        </_.fcp.ObjectModelEncapsulateLegacy.true...relation>
        <metadata-records>
          <metadata-record class='capability'>
            <remote-name />
            <remote-type>0</remote-type>
            <parent-name>[Custom SQL Query]</parent-name>
          </metadata-record>
          <metadata-record class='column'>
            <remote-name>Sales</remote-name>
            <remote-type>5</remote-type>
            <local-name>[Sales]</local-name>
            <parent-name>[Custom SQL Query]</parent-name>
            <local-type>real</local-type>
          </metadata-record>
          <metadata-record class='column'>
            <remote-name>Region</remote-name>
            <remote-type>130</remote-type>
            <local-name>[Region]</local-name>
            <parent-name>[Custom SQL Query]</parent-name>
            <local-type>string</local-type>
          </metadata-record>
          <metadata-record class='column'>
            <remote-name>Order Date</remote-name>
            <remote-type>7</remote-type>
            <local-name>[Order Date]</local-name>
            <parent-name>[Custom SQL Query]</parent-name>
            <local-type>date</local-type>
          </metadata-record>
        </metadata-records>
      </connection>
      <aliases enabled='yes' />
      <column caption='Profit Ratio' datatype='real' name='[Calculation_1]' role='measure' type='quantitative'>
        <calculation class='tableau' formula='SUM([Profit])/SUM([Sales])' />
      </column>
      <column datatype='string' name='[Region]' role='dimension' type='nominal' />
    </datasource>
    <datasource caption='Orphan' inline='true' name='federated.dead' version='18.1' />
  </datasources>
  <worksheets>
    <worksheet name='Sales by Region'>
      <table>
        <view>
          <datasources>
            <datasource caption='Superstore' name='federated.0a1b2c' />
          </datasources>
          <datasource-dependencies datasource='federated.0a1b2c'>
            <column datatype='real' name='[Sales]' role='measure' type='quantitative' />
            <column-instance column='[Sales]' derivation='Sum' name='[sum:Sales:qk]' pivot='key' type='quantitative' />
          </datasource-dependencies>
          <filter class='categorical' column='[federated.0a1b2c].[none:Region:nk]'>
            <groupfilter function='level-members' level='[none:Region:nk]' />
          </filter>
          <slices>
            <column>[federated.0a1b2c].[none:Region:nk]</column>
          </slices>
          <aggregation value='true' />
        </view>
        <style />
        <rows>[federated.0a1b2c].[none:Region:nk]</rows>
        <cols>[federated.0a1b2c].[sum:Sales:qk]</cols>
      </table>
    </worksheet>
    <worksheet name='Profitability'>
      <table>
        <view>
          <datasources>
            <datasource caption='Superstore' name='federated.0a1b2c' />
          </datasources>
          <aggregation value='true' />
        </view>
        <style />
        <rows>([federated.0a1b2c].[usr:Calculation_1:qk] / [federated.0a1b2c].[sum:Sales:qk])</rows>
        <cols />
      </table>
    </worksheet>
  </worksheets>
  <dashboards>
    <dashboard name='Executive Overview'>
      <size maxheight='800' maxwidth='1000' minheight='800' minwidth='1000' />
      <zones />
    </dashboard>
  </dashboards>
</workbook>
"#;

/// The smallest workbook where one field is used on two shelves.
pub const SINGLE_SHEET_TWB: &str = r#"<?xml version='1.0' encoding='utf-8' ?>
<workbook>
  <datasources>
    <datasource caption='Orders' name='Orders'>
      <connection class='excel-direct' filename='orders.xlsx' />
      <column datatype='real' name='[Sales]' role='measure' type='quantitative' />
    </datasource>
  </datasources>
  <worksheets>
    <worksheet name='Sheet1'>
      <table>
        <view>
          <filter class='quantitative' column='[none:Sales:qk]' />
        </view>
        <rows>[Sales]</rows>
        <cols />
      </table>
    </worksheet>
  </worksheets>
</workbook>
"#;

/// Wrap datasource and worksheet snippets in a workbook envelope.
pub fn workbook_xml(datasources: &str, worksheets: &str) -> String {
    format!(
        "<?xml version='1.0' encoding='utf-8' ?>\n<workbook>\n<datasources>{datasources}</datasources>\n<worksheets>{worksheets}</worksheets>\n</workbook>\n"
    )
}

/// A worksheet with the given rows and cols shelf text.
pub fn worksheet_xml(name: &str, rows: &str, cols: &str) -> String {
    format!(
        "<worksheet name='{name}'><table><view/><rows>{rows}</rows><cols>{cols}</cols></table></worksheet>"
    )
}
